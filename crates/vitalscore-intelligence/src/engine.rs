// ABOUTME: Facade running the full scoring pipeline over a window of metric samples
// ABOUTME: Produces snapshots and enriches them with recent-metric trends and recommendations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;
use vitalscore_core::errors::{AppError, AppResult};
use vitalscore_core::models::{
    CategoryScores, HealthScoreReport, HealthScoreSnapshot, MetricSample, MetricSummary,
    Recommendation,
};

use crate::aggregation::CategoryAggregator;
use crate::composer::OverallScoreComposer;
use crate::config::HealthScoreConfig;
use crate::recommendation_engine::RecommendationGenerator;
use crate::trend::TrendAnalyzer;

/// Result of scoring one observation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreComputation {
    /// Per-category scores
    pub categories: CategoryScores,
    /// Weighted overall score
    pub overall_score: u8,
    /// Samples in the window, scored or not
    pub data_points_count: u32,
}

/// Health score engine
///
/// Stateless apart from its configuration; safe to share across tasks.
#[derive(Debug, Clone)]
pub struct HealthScoreEngine {
    composer: OverallScoreComposer,
    trends: TrendAnalyzer,
    recommendations: RecommendationGenerator,
}

impl HealthScoreEngine {
    /// Create an engine from explicit configuration
    #[must_use]
    pub fn new(config: &HealthScoreConfig) -> Self {
        Self {
            composer: OverallScoreComposer::new(config.weights.clone()),
            trends: TrendAnalyzer::new(config.trend.clone()),
            recommendations: RecommendationGenerator::new(config.recommendations.clone()),
        }
    }

    /// Score a window of samples
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when the window is empty or when no sample
    /// belongs to a scored metric type
    pub fn compute(&self, samples: &[MetricSample]) -> AppResult<ScoreComputation> {
        if samples.is_empty() {
            return Err(AppError::insufficient_data(
                "No health metrics found in the observation window",
            ));
        }

        let categories = CategoryAggregator::aggregate(samples);
        let overall_score = self.composer.compose(&categories)?;
        let data_points_count = u32::try_from(samples.len()).unwrap_or(u32::MAX);

        debug!(
            overall_score,
            data_points = data_points_count,
            cardiovascular = ?categories.cardiovascular,
            metabolic = ?categories.metabolic,
            lifestyle = ?categories.lifestyle,
            vital_signs = ?categories.vital_signs,
            "Computed health score"
        );

        Ok(ScoreComputation {
            categories,
            overall_score,
            data_points_count,
        })
    }

    /// Score a window and wrap the result in a new snapshot
    ///
    /// # Errors
    ///
    /// See [`Self::compute`]
    pub fn build_snapshot(
        &self,
        user_id: Uuid,
        samples: &[MetricSample],
        period_days: u32,
    ) -> AppResult<HealthScoreSnapshot> {
        let computation = self.compute(samples)?;
        Ok(HealthScoreSnapshot::new(
            user_id,
            computation.overall_score,
            &computation.categories,
            computation.data_points_count,
            period_days,
        ))
    }

    /// Latest value and trend per metric type recorded since `window_start`
    #[must_use]
    pub fn recent_metrics(
        &self,
        samples: &[MetricSample],
        window_start: DateTime<Utc>,
    ) -> Vec<MetricSummary> {
        self.trends.summarize(samples, window_start)
    }

    /// Recommendations for a snapshot given the latest metric values
    #[must_use]
    pub fn recommendations(
        &self,
        snapshot: &HealthScoreSnapshot,
        recent_metrics: &[MetricSummary],
    ) -> Vec<Recommendation> {
        let latest = RecommendationGenerator::latest_values(recent_metrics);
        self.recommendations
            .generate(&snapshot.category_scores(), snapshot.overall_score, &latest)
    }

    /// Attach recent-metric trends and recommendations to a snapshot
    #[must_use]
    pub fn enrich(
        &self,
        snapshot: HealthScoreSnapshot,
        samples: &[MetricSample],
        window_start: DateTime<Utc>,
    ) -> HealthScoreReport {
        let recent_metrics = self.recent_metrics(samples, window_start);
        let recommendations = self.recommendations(&snapshot, &recent_metrics);
        HealthScoreReport {
            snapshot,
            recent_metrics,
            recommendations,
        }
    }
}

impl Default for HealthScoreEngine {
    fn default() -> Self {
        Self::new(&HealthScoreConfig::default())
    }
}
