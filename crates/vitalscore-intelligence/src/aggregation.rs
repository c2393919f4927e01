// ABOUTME: Groups samples by metric type, scores each window mean, and averages per category
// ABOUTME: Categories without any scored metric stay absent rather than collapsing to zero
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use vitalscore_core::constants::scoring::{AVERAGE_SCALE, MAX_SCORE};
use vitalscore_core::models::{Category, CategoryScores, MetricSample, MetricType};

use crate::scoring::MetricScorer;

/// Category Aggregator
///
/// Computes the arithmetic mean of every metric type in the window, scores it
/// through [`MetricScorer`], then takes the unweighted mean of the sub-scores
/// belonging to each category. The category mean is truncated to an integer.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Arithmetic mean rounded half-up to two decimal places
    ///
    /// Returns `None` for an empty input.
    #[must_use]
    pub fn window_average<I>(values: I) -> Option<Decimal>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((Decimal::ZERO, 0_u32), |(sum, count), value| {
                (sum + value, count + 1)
            });
        if count == 0 {
            return None;
        }
        sum.checked_div(Decimal::from(count)).map(|mean| {
            mean.round_dp_with_strategy(AVERAGE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        })
    }

    /// Sample values grouped by metric type
    #[must_use]
    pub fn values_by_type(samples: &[MetricSample]) -> BTreeMap<MetricType, Vec<Decimal>> {
        let mut grouped: BTreeMap<MetricType, Vec<Decimal>> = BTreeMap::new();
        for sample in samples {
            grouped
                .entry(sample.metric_type)
                .or_default()
                .push(sample.value);
        }
        grouped
    }

    /// Sub-score of every scored metric type present in the samples
    ///
    /// Metric types without a threshold table are skipped.
    #[must_use]
    pub fn metric_scores(samples: &[MetricSample]) -> BTreeMap<MetricType, u8> {
        Self::values_by_type(samples)
            .into_iter()
            .filter_map(|(metric_type, values)| {
                let mean = Self::window_average(values)?;
                MetricScorer::score(metric_type, mean).map(|score| (metric_type, score))
            })
            .collect()
    }

    /// Category scores from per-metric sub-scores
    #[must_use]
    pub fn from_metric_scores(metric_scores: &BTreeMap<MetricType, u8>) -> CategoryScores {
        let mut scores = CategoryScores::default();
        for category in Category::ALL {
            let (sum, count) = metric_scores
                .iter()
                .filter(|(metric_type, _)| metric_type.category() == category)
                .fold((0_u32, 0_u32), |(sum, count), (_, score)| {
                    (sum + u32::from(*score), count + 1)
                });
            if count > 0 {
                // Integer division truncates toward zero
                let mean = u8::try_from(sum / count).map_or(MAX_SCORE, |mean| mean.min(MAX_SCORE));
                scores.set(category, Some(mean));
            }
        }
        scores
    }

    /// Category scores for a window of samples
    #[must_use]
    pub fn aggregate(samples: &[MetricSample]) -> CategoryScores {
        Self::from_metric_scores(&Self::metric_scores(samples))
    }
}
