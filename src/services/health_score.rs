// ABOUTME: Health score service implementing calculate, recalculate, latest, and history
// ABOUTME: Fetches the observation window, runs the engine, persists snapshots, enriches reads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;
use vitalscore_core::errors::{AppError, AppResult};
use vitalscore_core::models::{HealthScoreReport, HealthScoreSnapshot, MetricSample};
use vitalscore_intelligence::HealthScoreEngine;

use crate::config::ScoringSettings;
use crate::database::{MetricStore, SnapshotStore};
use crate::tasks::{TaskSpawner, TokioTaskSpawner};

/// Health score operations
///
/// Cheap to clone; every clone shares the same stores and spawner. Concurrent
/// calculations for one user need no locking because snapshots are append-only.
#[derive(Clone)]
pub struct HealthScoreService {
    metrics: Arc<dyn MetricStore>,
    snapshots: Arc<dyn SnapshotStore>,
    spawner: Arc<dyn TaskSpawner>,
    engine: HealthScoreEngine,
    period_days: u32,
    history_limit: usize,
    lookback_days: i64,
}

impl HealthScoreService {
    /// Create a service that runs background work on the Tokio runtime
    #[must_use]
    pub fn new(
        metrics: Arc<dyn MetricStore>,
        snapshots: Arc<dyn SnapshotStore>,
        settings: ScoringSettings,
    ) -> Self {
        Self {
            metrics,
            snapshots,
            spawner: Arc::new(TokioTaskSpawner),
            engine: HealthScoreEngine::new(&settings.health_score),
            period_days: settings.period_days,
            history_limit: settings.history_limit,
            lookback_days: settings.health_score.trend.lookback_days,
        }
    }

    /// Replace the background executor
    #[must_use]
    pub fn with_spawner(mut self, spawner: Arc<dyn TaskSpawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Compute and persist a new snapshot from the observation window
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` if the window holds no samples (or only
    /// unscored ones), or a database error if a store call fails
    pub async fn calculate_health_score(&self, user_id: Uuid) -> AppResult<HealthScoreSnapshot> {
        let since = self.window_start(Utc::now());
        let samples = self.metrics.fetch_metric_samples(user_id, since).await?;

        if samples.is_empty() {
            info!(
                user_id = %user_id,
                period_days = self.period_days,
                "No health metrics in window"
            );
            return Err(AppError::insufficient_data(format!(
                "No health metrics recorded in the last {} days",
                self.period_days
            )));
        }

        let snapshot = self
            .engine
            .build_snapshot(user_id, &samples, self.period_days)?;
        let saved = self.snapshots.save_snapshot(&snapshot).await?;

        info!(
            user_id = %user_id,
            overall_score = saved.overall_score,
            data_points = saved.data_points_count,
            "Health score calculated"
        );
        Ok(saved)
    }

    /// Submit a recalculation in the background and return immediately
    ///
    /// Failures are logged with the user id and never reach the caller.
    pub fn recalculate_async(&self, user_id: Uuid) {
        let service = self.clone();
        let task = async move {
            service.calculate_health_score(user_id).await.map(|_| ())
        }
        .instrument(info_span!("recalculate_health_score", user_id = %user_id));

        self.spawner
            .spawn("recalculate_health_score", Box::pin(task));
    }

    /// Most recent snapshot, enriched with recent metrics and recommendations
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no snapshot yet
    pub async fn get_latest_health_score(&self, user_id: Uuid) -> AppResult<HealthScoreReport> {
        let snapshot = self
            .snapshots
            .fetch_latest_snapshot(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Health score"))?;

        let now = Utc::now();
        let samples = self.enrichment_samples(user_id, now).await?;
        Ok(self
            .engine
            .enrich(snapshot, &samples, self.window_start(now)))
    }

    /// Recent snapshots, newest first, each enriched like the latest one
    ///
    /// # Errors
    ///
    /// Returns a database error if a store call fails
    pub async fn get_health_score_history(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<HealthScoreReport>> {
        let history = self
            .snapshots
            .fetch_snapshot_history(user_id, self.history_limit)
            .await?;
        if history.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();
        let samples = self.enrichment_samples(user_id, now).await?;
        let window_start = self.window_start(now);
        Ok(history
            .into_iter()
            .map(|snapshot| self.engine.enrich(snapshot, &samples, window_start))
            .collect())
    }

    fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(i64::from(self.period_days))
    }

    /// Samples covering the observation window plus one trend lookback before it
    async fn enrichment_samples(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<MetricSample>> {
        let since = self.window_start(now) - Duration::days(self.lookback_days);
        self.metrics.fetch_metric_samples(user_id, since).await
    }
}
