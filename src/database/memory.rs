// ABOUTME: In-memory metric and snapshot store guarded by async read-write locks
// ABOUTME: Used by tests and by embedders that do not need persistence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;
use vitalscore_core::errors::AppResult;
use vitalscore_core::models::{HealthScoreSnapshot, MetricSample};

use super::{MetricStore, SnapshotStore};

/// Process-local store keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryStore {
    samples: RwLock<HashMap<Uuid, Vec<MetricSample>>>,
    snapshots: RwLock<HashMap<Uuid, Vec<HealthScoreSnapshot>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots stored for a user
    pub async fn snapshot_count(&self, user_id: Uuid) -> usize {
        self.snapshots
            .read()
            .await
            .get(&user_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl MetricStore for InMemoryStore {
    async fn fetch_metric_samples(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<MetricSample>> {
        let samples = self.samples.read().await;
        Ok(samples
            .get(&user_id)
            .map(|all| {
                all.iter()
                    .filter(|sample| sample.recorded_at >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn record_samples(&self, user_id: Uuid, samples: &[MetricSample]) -> AppResult<usize> {
        self.samples
            .write()
            .await
            .entry(user_id)
            .or_default()
            .extend_from_slice(samples);
        Ok(samples.len())
    }
}

#[async_trait]
impl SnapshotStore for InMemoryStore {
    async fn save_snapshot(
        &self,
        snapshot: &HealthScoreSnapshot,
    ) -> AppResult<HealthScoreSnapshot> {
        self.snapshots
            .write()
            .await
            .entry(snapshot.user_id)
            .or_default()
            .push(snapshot.clone());
        Ok(snapshot.clone())
    }

    async fn fetch_latest_snapshot(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<HealthScoreSnapshot>> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .get(&user_id)
            .and_then(|all| all.iter().max_by_key(|s| s.calculated_at))
            .cloned())
    }

    async fn fetch_snapshot_history(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<HealthScoreSnapshot>> {
        let snapshots = self.snapshots.read().await;
        let mut history = snapshots.get(&user_id).cloned().unwrap_or_default();
        history.sort_by_key(|s| Reverse(s.calculated_at));
        history.truncate(limit);
        Ok(history)
    }
}
