// ABOUTME: Storage abstraction for metric samples and health score snapshots
// ABOUTME: Async traits implemented by the SQLite and in-memory backends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Database Abstraction
//!
//! The scoring service only needs two narrow contracts: reading a user's
//! samples since a point in time, and appending/reading score snapshots.
//! Snapshots are append-only; no operation updates or deletes one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use vitalscore_core::errors::AppResult;
use vitalscore_core::models::{HealthScoreSnapshot, MetricSample};

/// In-memory backend for tests and embedding
pub mod memory;

/// `SQLite` backend built on `sqlx`
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Read access to a user's recorded metric samples
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// All samples recorded at or after `since`, in no particular order
    async fn fetch_metric_samples(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<MetricSample>>;

    /// Append samples for a user; returns how many were stored
    async fn record_samples(&self, user_id: Uuid, samples: &[MetricSample]) -> AppResult<usize>;
}

/// Append-only storage for score snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot and return it as stored
    async fn save_snapshot(&self, snapshot: &HealthScoreSnapshot)
        -> AppResult<HealthScoreSnapshot>;

    /// Most recent snapshot by `calculated_at`, if any
    async fn fetch_latest_snapshot(&self, user_id: Uuid)
        -> AppResult<Option<HealthScoreSnapshot>>;

    /// Up to `limit` snapshots ordered by `calculated_at` descending
    async fn fetch_snapshot_history(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<HealthScoreSnapshot>>;
}
