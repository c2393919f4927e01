// ABOUTME: Application constants for health scoring windows, weights, and thresholds
// ABOUTME: Single source of truth for the default values used by config and services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants organized by domain.

/// Observation window used to select samples for scoring
pub mod scoring {
    /// Default lookback window for score computation (days)
    pub const DEFAULT_PERIOD_DAYS: u32 = 90;

    /// Default number of snapshots returned by history queries
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;

    /// Highest possible sub-score
    pub const MAX_SCORE: u8 = 100;

    /// Decimal places kept when averaging raw metric values
    pub const AVERAGE_SCALE: u32 = 2;
}

/// Fixed category weights for the overall score
pub mod weights {
    /// Cardiovascular category weight
    pub const CARDIOVASCULAR: f64 = 0.35;
    /// Metabolic category weight
    pub const METABOLIC: f64 = 0.35;
    /// Lifestyle category weight
    pub const LIFESTYLE: f64 = 0.20;
    /// Vital signs category weight
    pub const VITAL_SIGNS: f64 = 0.10;
}

/// Score bands that drive recommendations
pub mod thresholds {
    /// Overall score at or above which the user is congratulated
    pub const EXCELLENT: u8 = 90;
    /// Category score below which an escalation is emitted
    pub const FAIR: u8 = 60;
    /// Overall score below which a provider consultation is advised
    pub const NEEDS_IMPROVEMENT: u8 = 40;
}

/// Trend analysis windows
pub mod trend {
    /// Width of the "recent" window ending at the latest sample (days)
    pub const RECENT_WINDOW_DAYS: i64 = 14;
    /// Total lookback covering both windows (days)
    pub const LOOKBACK_DAYS: i64 = 28;
    /// Minimum number of samples across both windows
    pub const MIN_SAMPLES: usize = 3;
    /// Absolute change (percent) below which a metric is stable
    pub const STABLE_CHANGE_PERCENT: i64 = 5;
    /// Decimal places kept on the relative change ratio
    pub const CHANGE_RATIO_SCALE: u32 = 4;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const VITALSCORE: &str = "vitalscore";
}
