// ABOUTME: Health score snapshot, trend, and recommendation models
// ABOUTME: Snapshots are append-only history; trends and recommendations are transient
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::metric::{Category, MetricType};

/// Per-category scores; `None` means the category had no data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Cardiovascular score (0-100)
    pub cardiovascular: Option<u8>,
    /// Metabolic score (0-100)
    pub metabolic: Option<u8>,
    /// Lifestyle score (0-100)
    pub lifestyle: Option<u8>,
    /// Vital signs score (0-100)
    pub vital_signs: Option<u8>,
}

impl CategoryScores {
    /// Score for a single category
    #[must_use]
    pub const fn get(&self, category: Category) -> Option<u8> {
        match category {
            Category::Cardiovascular => self.cardiovascular,
            Category::Metabolic => self.metabolic,
            Category::Lifestyle => self.lifestyle,
            Category::VitalSigns => self.vital_signs,
        }
    }

    /// Set the score for a single category
    pub fn set(&mut self, category: Category, score: Option<u8>) {
        let slot = match category {
            Category::Cardiovascular => &mut self.cardiovascular,
            Category::Metabolic => &mut self.metabolic,
            Category::Lifestyle => &mut self.lifestyle,
            Category::VitalSigns => &mut self.vital_signs,
        };
        *slot = score;
    }

    /// Categories that have a score, in reporting order
    pub fn present(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|score| (category, score)))
    }

    /// True when no category has data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Persisted result of one score computation
///
/// Snapshots are immutable once created; a user accumulates many of them
/// ordered by `calculated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScoreSnapshot {
    /// Snapshot identifier
    pub id: Uuid,
    /// Owner of the metric data
    pub user_id: Uuid,
    /// Weighted overall score (0-100)
    pub overall_score: u8,
    /// Cardiovascular sub-score
    pub cardiovascular_score: Option<u8>,
    /// Metabolic sub-score
    pub metabolic_score: Option<u8>,
    /// Lifestyle sub-score
    pub lifestyle_score: Option<u8>,
    /// Vital signs sub-score
    pub vital_signs_score: Option<u8>,
    /// When the computation ran
    pub calculated_at: DateTime<Utc>,
    /// Number of samples in the observation window
    pub data_points_count: u32,
    /// Length of the observation window
    pub period_days: u32,
}

impl HealthScoreSnapshot {
    /// Build a fresh snapshot with a new id, stamped now
    #[must_use]
    pub fn new(
        user_id: Uuid,
        overall_score: u8,
        categories: &CategoryScores,
        data_points_count: u32,
        period_days: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            overall_score,
            cardiovascular_score: categories.cardiovascular,
            metabolic_score: categories.metabolic,
            lifestyle_score: categories.lifestyle,
            vital_signs_score: categories.vital_signs,
            calculated_at: Utc::now(),
            data_points_count,
            period_days,
        }
    }

    /// Category scores carried by this snapshot
    #[must_use]
    pub const fn category_scores(&self) -> CategoryScores {
        CategoryScores {
            cardiovascular: self.cardiovascular_score,
            metabolic: self.metabolic_score,
            lifestyle: self.lifestyle_score,
            vital_signs: self.vital_signs_score,
        }
    }
}

/// Direction of a metric over the trend windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendResult {
    /// Moving in the healthy direction
    Improving,
    /// Less than the stable band of change
    Stable,
    /// Moving in the unhealthy direction
    Declining,
    /// Not enough samples to decide
    InsufficientData,
}

impl TrendResult {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for TrendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act promptly
    High,
}

/// Area a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Cardiovascular category
    Cardiovascular,
    /// Metabolic category
    Metabolic,
    /// Lifestyle category
    Lifestyle,
    /// Vital signs category
    VitalSigns,
    /// Overall score
    Overall,
}

impl From<Category> for RecommendationCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Cardiovascular => Self::Cardiovascular,
            Category::Metabolic => Self::Metabolic,
            Category::Lifestyle => Self::Lifestyle,
            Category::VitalSigns => Self::VitalSigns,
        }
    }
}

/// Advisory text computed per request, never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Area the advice is about
    pub category: RecommendationCategory,
    /// Advice text
    pub message: String,
    /// Urgency
    pub priority: Priority,
}

impl Recommendation {
    /// Create a recommendation
    pub fn new(
        category: RecommendationCategory,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            priority,
        }
    }
}

/// Latest value and trend for one metric type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Metric type
    pub metric_type: MetricType,
    /// Most recent recorded value
    pub latest_value: Decimal,
    /// Unit of the latest value
    pub unit: String,
    /// When the latest value was recorded
    pub recorded_at: DateTime<Utc>,
    /// Recent-vs-older direction
    pub trend: TrendResult,
}

/// Snapshot enriched with live trends and recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScoreReport {
    /// Persisted score
    #[serde(flatten)]
    pub snapshot: HealthScoreSnapshot,
    /// One entry per metric type present in the observation window
    pub recent_metrics: Vec<MetricSummary>,
    /// Advice derived from the snapshot and latest values
    pub recommendations: Vec<Recommendation>,
}
