// ABOUTME: Health score computation and trend-analysis engine
// ABOUTME: Metric scoring tables, category aggregation, weighting, trends, and recommendations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # VitalScore Intelligence
//!
//! Pure, synchronous computation over a user's metric samples. Nothing in this
//! crate performs I/O; the root crate fetches samples and persists snapshots.
//!
//! Pipeline, leaf first:
//!
//! 1. [`scoring::MetricScorer`] maps a metric type and window mean to a 0-100 sub-score
//! 2. [`aggregation::CategoryAggregator`] averages sub-scores per category
//! 3. [`composer::OverallScoreComposer`] weights present categories into the overall score
//! 4. [`trend::TrendAnalyzer`] classifies recent-vs-older direction per metric type
//! 5. [`recommendation_engine::RecommendationGenerator`] emits advisory text
//!
//! [`engine::HealthScoreEngine`] wires the steps together.

/// Scoring, weighting, and trend configuration
pub mod config;

/// Per-metric threshold tables
pub mod scoring;

/// Per-category aggregation of sub-scores
pub mod aggregation;

/// Weighted overall score
pub mod composer;

/// Recent-vs-older trend classification
pub mod trend;

/// Rule-based recommendations
pub mod recommendation_engine;

/// End-to-end computation facade
pub mod engine;

pub use aggregation::CategoryAggregator;
pub use composer::OverallScoreComposer;
pub use config::HealthScoreConfig;
pub use engine::{HealthScoreEngine, ScoreComputation};
pub use recommendation_engine::RecommendationGenerator;
pub use scoring::{MetricScorer, ThresholdTable};
pub use trend::TrendAnalyzer;
