// ABOUTME: Recent-vs-older window comparison classifying each metric's direction
// ABOUTME: Direction-sensitive: for lower-is-better metrics a decrease counts as improving
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Trend Analyzer
//!
//! For a metric type whose latest sample was taken at `t`:
//!
//! - recent window: `(t - recent_window_days, t]`
//! - older window: `(t - lookback_days, t - recent_window_days]`
//!
//! The change between the two window means is expressed as a percentage of the
//! older mean. Fewer than `min_samples` samples across both windows, an empty
//! older window, or an older mean of zero yield [`TrendResult::InsufficientData`].

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use vitalscore_core::constants::trend::CHANGE_RATIO_SCALE;
use vitalscore_core::models::{MetricSample, MetricSummary, MetricType, TrendResult};

use crate::aggregation::CategoryAggregator;
use crate::config::TrendConfig;

/// Classifies metric direction over two adjacent windows
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    /// Create an analyzer with the given windows
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Percent change of the recent mean relative to the older mean
    ///
    /// Returns `None` when the windows do not hold enough data to compare.
    #[must_use]
    pub fn change_percent(
        &self,
        metric_type: MetricType,
        samples: &[MetricSample],
        latest_at: DateTime<Utc>,
    ) -> Option<Decimal> {
        let recent_start = latest_at - Duration::days(self.config.recent_window_days);
        let lookback_start = latest_at - Duration::days(self.config.lookback_days);

        let mut recent = Vec::new();
        let mut older = Vec::new();
        for sample in samples.iter().filter(|s| s.metric_type == metric_type) {
            let at = sample.recorded_at;
            if at > recent_start && at <= latest_at {
                recent.push(sample.value);
            } else if at > lookback_start && at <= recent_start {
                older.push(sample.value);
            }
        }

        if recent.len() + older.len() < self.config.min_samples {
            return None;
        }

        let recent_avg = CategoryAggregator::window_average(recent)?;
        let older_avg = CategoryAggregator::window_average(older)?;
        if older_avg.is_zero() {
            return None;
        }

        let ratio = (recent_avg - older_avg)
            .checked_div(older_avg)?
            .round_dp_with_strategy(CHANGE_RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero);
        ratio.checked_mul(Decimal::ONE_HUNDRED)
    }

    /// Trend of one metric type relative to its latest sample time
    #[must_use]
    pub fn analyze(
        &self,
        metric_type: MetricType,
        samples: &[MetricSample],
        latest_at: DateTime<Utc>,
    ) -> TrendResult {
        let Some(change) = self.change_percent(metric_type, samples, latest_at) else {
            return TrendResult::InsufficientData;
        };

        if change.abs() < self.config.stable_change_percent {
            return TrendResult::Stable;
        }

        let increasing = change.is_sign_positive();
        let improving = if metric_type.is_lower_better() {
            !increasing
        } else {
            increasing
        };

        if improving {
            TrendResult::Improving
        } else {
            TrendResult::Declining
        }
    }

    /// Latest value and trend for every metric type recorded since `window_start`
    ///
    /// `samples` may reach further back than `window_start` so trends near the
    /// window edge still see their older window. Output follows metric type order.
    #[must_use]
    pub fn summarize(
        &self,
        samples: &[MetricSample],
        window_start: DateTime<Utc>,
    ) -> Vec<MetricSummary> {
        let mut latest: BTreeMap<MetricType, &MetricSample> = BTreeMap::new();
        for sample in samples.iter().filter(|s| s.recorded_at >= window_start) {
            latest
                .entry(sample.metric_type)
                .and_modify(|current| {
                    if sample.recorded_at >= current.recorded_at {
                        *current = sample;
                    }
                })
                .or_insert(sample);
        }

        latest
            .into_values()
            .map(|sample| MetricSummary {
                metric_type: sample.metric_type,
                latest_value: sample.value,
                unit: sample.unit.clone(),
                recorded_at: sample.recorded_at,
                trend: self.analyze(sample.metric_type, samples, sample.recorded_at),
            })
            .collect()
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn at(
        now: DateTime<Utc>,
        days_ago: i64,
        metric_type: MetricType,
        value: Decimal,
    ) -> MetricSample {
        MetricSample::new(metric_type, value, now - Duration::days(days_ago))
    }

    #[test]
    fn test_sample_on_recent_boundary_counts_as_older() {
        let now = Utc::now();
        let samples = vec![
            at(now, 0, MetricType::Steps, dec!(8000)),
            at(now, 1, MetricType::Steps, dec!(8000)),
            at(now, 14, MetricType::Steps, dec!(4000)),
        ];
        let change = TrendAnalyzer::default()
            .change_percent(MetricType::Steps, &samples, now)
            .unwrap();
        assert_eq!(change, dec!(100));
    }

    #[test]
    fn test_samples_beyond_lookback_are_ignored() {
        let now = Utc::now();
        let samples = vec![
            at(now, 0, MetricType::Steps, dec!(8000)),
            at(now, 1, MetricType::Steps, dec!(8000)),
            at(now, 28, MetricType::Steps, dec!(4000)),
        ];
        assert_eq!(
            TrendAnalyzer::default().analyze(MetricType::Steps, &samples, now),
            TrendResult::InsufficientData
        );
    }

    #[test]
    fn test_other_metric_types_are_ignored() {
        let now = Utc::now();
        let samples = vec![
            at(now, 0, MetricType::Steps, dec!(8000)),
            at(now, 20, MetricType::Steps, dec!(8000)),
            at(now, 20, MetricType::SleepHours, dec!(7)),
        ];
        assert_eq!(
            TrendAnalyzer::default().analyze(MetricType::Steps, &samples, now),
            TrendResult::InsufficientData
        );
    }

    #[test]
    fn test_change_ratio_is_rounded_to_four_places() {
        let now = Utc::now();
        // (100 - 3) / 3 = 32.33333.. -> 32.3333 -> 3233.33
        let samples = vec![
            at(now, 0, MetricType::HeartRate, dec!(100)),
            at(now, 2, MetricType::HeartRate, dec!(100)),
            at(now, 20, MetricType::HeartRate, dec!(3)),
        ];
        let change = TrendAnalyzer::default()
            .change_percent(MetricType::HeartRate, &samples, now)
            .unwrap();
        assert_eq!(change, dec!(3233.33));
    }
}
