// ABOUTME: Health score configuration for category weighting, recommendations, and trends
// ABOUTME: Defaults mirror the clinical constants; environment variables may override them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Health Score Configuration
//!
//! Type-safe configuration for the scoring pipeline. The per-metric threshold
//! tables are fixed and not configurable; only the weighting,
//! recommendation bands, and trend windows can be tuned.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export HEALTH_SCORE_WEIGHT_LIFESTYLE=0.25
//!    export HEALTH_SCORE_TREND_STABLE_PERCENT=3
//!    ```
//!
//! 2. Default values (if env vars not set)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use vitalscore_core::constants::{thresholds, trend, weights};
use vitalscore_core::errors::AppError;
use vitalscore_core::models::Category;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordered values are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Category weights are unusable
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Weight of each category in the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Cardiovascular weight
    pub cardiovascular: f64,
    /// Metabolic weight
    pub metabolic: f64,
    /// Lifestyle weight
    pub lifestyle: f64,
    /// Vital signs weight
    pub vital_signs: f64,
}

impl CategoryWeights {
    /// Weight for a single category
    #[must_use]
    pub const fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Cardiovascular => self.cardiovascular,
            Category::Metabolic => self.metabolic,
            Category::Lifestyle => self.lifestyle,
            Category::VitalSigns => self.vital_signs,
        }
    }

    /// Sum of all four weights
    #[must_use]
    pub fn total(&self) -> f64 {
        Category::ALL.into_iter().map(|c| self.weight(c)).sum()
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            cardiovascular: weights::CARDIOVASCULAR,
            metabolic: weights::METABOLIC,
            lifestyle: weights::LIFESTYLE,
            vital_signs: weights::VITAL_SIGNS,
        }
    }
}

/// Score bands used by the recommendation generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Overall score at or above which a congratulatory note is emitted
    pub excellent: u8,
    /// Category score below which an escalation is emitted
    pub fair: u8,
    /// Overall score below which a provider consultation is advised
    pub needs_improvement: u8,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            excellent: thresholds::EXCELLENT,
            fair: thresholds::FAIR,
            needs_improvement: thresholds::NEEDS_IMPROVEMENT,
        }
    }
}

/// Trend window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Width of the recent window ending at the latest sample (days)
    pub recent_window_days: i64,
    /// Total lookback covering recent and older windows (days)
    pub lookback_days: i64,
    /// Minimum samples across both windows
    pub min_samples: usize,
    /// Absolute percent change below which the trend is stable
    pub stable_change_percent: Decimal,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            recent_window_days: trend::RECENT_WINDOW_DAYS,
            lookback_days: trend::LOOKBACK_DAYS,
            min_samples: trend::MIN_SAMPLES,
            stable_change_percent: Decimal::from(trend::STABLE_CHANGE_PERCENT),
        }
    }
}

/// Main health score configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Overall score weighting
    pub weights: CategoryWeights,
    /// Recommendation bands
    pub recommendations: RecommendationThresholds,
    /// Trend windows
    pub trend: TrendConfig,
}

impl HealthScoreConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate weights, bands, and windows
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Category::ALL
            .into_iter()
            .any(|c| !self.weights.weight(c).is_finite() || self.weights.weight(c) <= 0.0)
        {
            return Err(ConfigError::InvalidWeights(
                "Category weights must be positive and finite",
            ));
        }

        if (self.weights.total() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Category weights should sum to 1.0",
            ));
        }

        let bands = &self.recommendations;
        if bands.needs_improvement >= bands.fair || bands.fair >= bands.excellent {
            return Err(ConfigError::InvalidRange(
                "needs_improvement < fair < excellent must hold",
            ));
        }
        if bands.excellent > 100 {
            return Err(ConfigError::InvalidRange("excellent must be <= 100"));
        }

        let trend = &self.trend;
        if trend.recent_window_days <= 0 || trend.recent_window_days >= trend.lookback_days {
            return Err(ConfigError::InvalidRange(
                "0 < recent_window_days < lookback_days must hold",
            ));
        }
        if trend.stable_change_percent.is_sign_negative() {
            return Err(ConfigError::InvalidRange(
                "stable_change_percent must not be negative",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("HEALTH_SCORE_WEIGHT_CARDIOVASCULAR")? {
            self.weights.cardiovascular = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_WEIGHT_METABOLIC")? {
            self.weights.metabolic = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_WEIGHT_LIFESTYLE")? {
            self.weights.lifestyle = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_WEIGHT_VITAL_SIGNS")? {
            self.weights.vital_signs = val;
        }

        if let Some(val) = env_override("HEALTH_SCORE_EXCELLENT_THRESHOLD")? {
            self.recommendations.excellent = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_FAIR_THRESHOLD")? {
            self.recommendations.fair = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_NEEDS_IMPROVEMENT_THRESHOLD")? {
            self.recommendations.needs_improvement = val;
        }

        if let Some(val) = env_override("HEALTH_SCORE_TREND_RECENT_DAYS")? {
            self.trend.recent_window_days = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_TREND_LOOKBACK_DAYS")? {
            self.trend.lookback_days = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_TREND_MIN_SAMPLES")? {
            self.trend.min_samples = val;
        }
        if let Some(val) = env_override("HEALTH_SCORE_TREND_STABLE_PERCENT")? {
            self.trend.stable_change_percent = val;
        }

        Ok(self)
    }
}

/// Parse an optional environment variable
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}"))),
        Err(_) => Ok(None),
    }
}
