// ABOUTME: Benchmark fixtures generating realistic metric sample histories
// ABOUTME: Deterministic data so measurements are reproducible between runs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Benchmark fixtures generating realistic metric sample histories.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use vitalscore::models::{MetricSample, MetricType};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SampleBatchSize {
    /// One reading of a few metrics per day for two weeks
    Small,
    /// Several metrics per day across the default window
    Medium,
    /// Every metric several times per day across the default window
    Large,
}

impl SampleBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 1_000,
            Self::Large => 10_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Baseline value and deterministic jitter range per metric type
const fn baseline(metric_type: MetricType) -> (i64, i64, u32) {
    // (mantissa, jitter, scale)
    match metric_type {
        MetricType::BloodPressureSystolic => (1180, 150, 1),
        MetricType::BloodPressureDiastolic => (780, 90, 1),
        MetricType::HeartRate => (680, 120, 1),
        MetricType::OxygenSaturation => (970, 30, 1),
        MetricType::Weight => (7250, 200, 2),
        MetricType::Height => (1780, 0, 1),
        MetricType::Bmi => (2340, 150, 2),
        MetricType::BloodGlucose => (920, 160, 1),
        MetricType::HbA1c => (54, 6, 1),
        MetricType::CholesterolTotal => (1900, 300, 1),
        MetricType::CholesterolLdl => (1100, 250, 1),
        MetricType::CholesterolHdl => (550, 100, 1),
        MetricType::Triglycerides => (1400, 300, 1),
        MetricType::BodyTemperature => (3690, 40, 2),
        MetricType::RespiratoryRate => (150, 40, 1),
        MetricType::SleepHours => (72, 15, 1),
        MetricType::ExerciseMinutes => (300, 150, 1),
        MetricType::WaterIntake => (24, 8, 1),
        MetricType::Steps => (80000, 30000, 1),
    }
}

/// Generate `count` samples spread over the last `span_days`, cycling through every metric type
#[must_use]
pub fn generate_samples(count: usize, span_days: i64, now: DateTime<Utc>) -> Vec<MetricSample> {
    let span_minutes = (span_days * 24 * 60).max(1);
    (0..count)
        .map(|index| {
            let metric_type = MetricType::ALL[index % MetricType::ALL.len()];
            let (mantissa, jitter, scale) = baseline(metric_type);
            let step = i64::try_from(index).unwrap_or(i64::MAX);
            let offset = if jitter == 0 {
                0
            } else {
                (step * 37) % (2 * jitter) - jitter
            };
            let value = Decimal::new(mantissa + offset, scale);
            let minutes_ago = (step * 97) % span_minutes;
            MetricSample::new(metric_type, value, now - Duration::minutes(minutes_ago))
        })
        .collect()
}

/// Samples for a named batch size over the default 90-day window
#[must_use]
pub fn generate_batch(size: SampleBatchSize) -> Vec<MetricSample> {
    generate_samples(size.count(), 90, Utc::now())
}
