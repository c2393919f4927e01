// ABOUTME: Core data models for metric samples and health score results
// ABOUTME: Re-exports metric, snapshot, trend, and recommendation types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Metric types, categories, and samples
pub mod metric;

/// Snapshots, trends, recommendations, and reports
pub mod health_score;

pub use health_score::{
    CategoryScores, HealthScoreReport, HealthScoreSnapshot, MetricSummary, Priority,
    Recommendation, RecommendationCategory, TrendResult,
};
pub use metric::{Category, MetricSample, MetricType};
