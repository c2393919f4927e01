// ABOUTME: Combines present category scores into the weighted 0-100 overall score
// ABOUTME: Weights are renormalized over the categories that actually have data
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;
use vitalscore_core::constants::scoring::MAX_SCORE;
use vitalscore_core::errors::{AppError, AppResult};
use vitalscore_core::models::CategoryScores;

use crate::config::CategoryWeights;

/// Weights are resolved to basis points before weighting
const WEIGHT_SCALE: f64 = 10_000.0;
const WEIGHT_DP: u32 = 4;

/// Overall Score Composer
///
/// Absent categories are excluded from both the weighted sum and the weight
/// total, so a single present category collapses to its own score.
#[derive(Debug, Clone)]
pub struct OverallScoreComposer {
    weights: CategoryWeights,
}

impl OverallScoreComposer {
    /// Create a composer using the given weights
    #[must_use]
    pub const fn new(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    /// Weighted overall score, rounded half-up
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when no category has a score
    pub fn compose(&self, scores: &CategoryScores) -> AppResult<u8> {
        let (weighted_sum, weight_total) = scores.present().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(weighted_sum, weight_total), (category, score)| {
                let weight = Self::exact_weight(self.weights.weight(category));
                (
                    weighted_sum + weight * Decimal::from(score),
                    weight_total + weight,
                )
            },
        );

        let Some(mean) = weighted_sum.checked_div(weight_total) else {
            return Err(AppError::insufficient_data(
                "No category scores available to compose an overall score",
            ));
        };

        let overall = mean
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .min(Decimal::from(MAX_SCORE));
        debug!(%weighted_sum, %weight_total, %overall, "Composed overall score");
        Ok(u8::try_from(overall).unwrap_or(MAX_SCORE))
    }

    /// Weight as an exact decimal with four fractional digits
    fn exact_weight(weight: f64) -> Decimal {
        // Weights are validated positive and finite
        Decimal::new((weight * WEIGHT_SCALE).round() as i64, WEIGHT_DP)
    }
}

impl Default for OverallScoreComposer {
    fn default() -> Self {
        Self::new(CategoryWeights::default())
    }
}
