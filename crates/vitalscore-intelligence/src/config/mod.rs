// ABOUTME: Configuration module for vitalscore-intelligence crate
// ABOUTME: Re-exports health score configuration types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Category weights, recommendation thresholds, and trend windows
pub mod health_score;

pub use health_score::{
    CategoryWeights, ConfigError, HealthScoreConfig, RecommendationThresholds, TrendConfig,
};
