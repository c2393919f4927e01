// ABOUTME: Rule-based recommendations from category scores and latest metric values
// ABOUTME: Emits category-tagged advice with low/medium/high priority in a fixed order
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recommendation Generator
//!
//! Rules for a category only run when that category has a score. Metric rules
//! additionally require a latest value for the metric. Output order is fixed:
//! cardiovascular, metabolic, lifestyle, vital signs, then overall.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitalscore_core::models::{
    Category, CategoryScores, MetricSummary, MetricType, Priority, Recommendation,
    RecommendationCategory,
};

use crate::config::RecommendationThresholds;

/// Latest value per metric type
pub type LatestValues = BTreeMap<MetricType, Decimal>;

/// Produces advisory recommendations
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    thresholds: RecommendationThresholds,
}

impl RecommendationGenerator {
    /// Create a generator with the given score bands
    #[must_use]
    pub const fn new(thresholds: RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    /// Latest values keyed by metric type from a recent-metric summary
    #[must_use]
    pub fn latest_values(recent_metrics: &[MetricSummary]) -> LatestValues {
        recent_metrics
            .iter()
            .map(|summary| (summary.metric_type, summary.latest_value))
            .collect()
    }

    /// Generate recommendations for a scored window
    #[must_use]
    pub fn generate(
        &self,
        scores: &CategoryScores,
        overall_score: u8,
        latest: &LatestValues,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if let Some(score) = scores.cardiovascular {
            Self::cardiovascular(latest, &mut recommendations);
            self.escalate(Category::Cardiovascular, score, &mut recommendations);
        }
        if let Some(score) = scores.metabolic {
            Self::metabolic(latest, &mut recommendations);
            self.escalate(Category::Metabolic, score, &mut recommendations);
        }
        if let Some(score) = scores.lifestyle {
            Self::lifestyle(latest, &mut recommendations);
            self.escalate(Category::Lifestyle, score, &mut recommendations);
        }
        if let Some(score) = scores.vital_signs {
            self.escalate(Category::VitalSigns, score, &mut recommendations);
        }

        self.overall(overall_score, &mut recommendations);
        recommendations
    }

    fn cardiovascular(latest: &LatestValues, out: &mut Vec<Recommendation>) {
        if let Some(&systolic) = latest.get(&MetricType::BloodPressureSystolic) {
            if systolic > dec!(130) {
                let priority = if systolic > dec!(140) {
                    Priority::High
                } else {
                    Priority::Medium
                };
                out.push(Recommendation::new(
                    RecommendationCategory::Cardiovascular,
                    "Your blood pressure is elevated. Consider reducing sodium intake and increasing physical activity.",
                    priority,
                ));
            }
        }

        if latest
            .get(&MetricType::HeartRate)
            .is_some_and(|&hr| hr > dec!(100))
        {
            out.push(Recommendation::new(
                RecommendationCategory::Cardiovascular,
                "Your resting heart rate is elevated. Regular aerobic exercise can help lower it.",
                Priority::Medium,
            ));
        }
    }

    fn metabolic(latest: &LatestValues, out: &mut Vec<Recommendation>) {
        if let Some(&bmi) = latest.get(&MetricType::Bmi) {
            if bmi > dec!(25) {
                let priority = if bmi > dec!(30) {
                    Priority::High
                } else {
                    Priority::Medium
                };
                out.push(Recommendation::new(
                    RecommendationCategory::Metabolic,
                    "Your BMI indicates you're overweight. Consider a balanced diet and regular exercise.",
                    priority,
                ));
            } else if bmi < dec!(18.5) {
                out.push(Recommendation::new(
                    RecommendationCategory::Metabolic,
                    "Your BMI is below normal. Consult a nutritionist for guidance.",
                    Priority::Medium,
                ));
            }
        }

        if let Some(&glucose) = latest.get(&MetricType::BloodGlucose) {
            if glucose > dec!(100) {
                let priority = if glucose >= dec!(126) {
                    Priority::High
                } else {
                    Priority::Medium
                };
                out.push(Recommendation::new(
                    RecommendationCategory::Metabolic,
                    "Your blood glucose is elevated. Limit sugar intake and maintain a healthy weight.",
                    priority,
                ));
            }
        }

        if let Some(&ldl) = latest.get(&MetricType::CholesterolLdl) {
            if ldl > dec!(130) {
                let priority = if ldl > dec!(160) {
                    Priority::High
                } else {
                    Priority::Medium
                };
                out.push(Recommendation::new(
                    RecommendationCategory::Metabolic,
                    "Your LDL cholesterol is high. Reduce saturated fat intake and increase fiber.",
                    priority,
                ));
            }
        }
    }

    fn lifestyle(latest: &LatestValues, out: &mut Vec<Recommendation>) {
        let below = |metric_type: MetricType, limit: Decimal| {
            latest.get(&metric_type).is_some_and(|&value| value < limit)
        };

        if below(MetricType::SleepHours, dec!(7)) {
            out.push(Recommendation::new(
                RecommendationCategory::Lifestyle,
                "You're not getting enough sleep. Aim for 7-9 hours per night.",
                Priority::Medium,
            ));
        }
        if below(MetricType::ExerciseMinutes, dec!(22)) {
            out.push(Recommendation::new(
                RecommendationCategory::Lifestyle,
                "Increase your daily physical activity. Aim for at least 150 minutes per week.",
                Priority::Medium,
            ));
        }
        if below(MetricType::WaterIntake, dec!(2)) {
            out.push(Recommendation::new(
                RecommendationCategory::Lifestyle,
                "Increase your water intake. Aim for 2-3 liters daily.",
                Priority::Low,
            ));
        }
        if below(MetricType::Steps, dec!(5000)) {
            out.push(Recommendation::new(
                RecommendationCategory::Lifestyle,
                "Try to walk more. Aim for at least 10,000 steps per day.",
                Priority::Medium,
            ));
        }
    }

    fn escalate(&self, category: Category, score: u8, out: &mut Vec<Recommendation>) {
        if score >= self.thresholds.fair {
            return;
        }
        let message = match category {
            Category::Cardiovascular => {
                "Your cardiovascular health needs attention. Schedule a checkup with your doctor."
            }
            Category::Metabolic => {
                "Your metabolic health needs attention. Review your diet and recent lab results with your doctor."
            }
            Category::Lifestyle => {
                "Your daily habits are lowering your health score. Small, consistent changes make a difference."
            }
            Category::VitalSigns => {
                "Your vital signs are outside normal ranges. Have them checked by a healthcare provider."
            }
        };
        out.push(Recommendation::new(category.into(), message, Priority::High));
    }

    fn overall(&self, overall_score: u8, out: &mut Vec<Recommendation>) {
        if overall_score >= self.thresholds.excellent {
            out.push(Recommendation::new(
                RecommendationCategory::Overall,
                "Excellent health! Keep up your healthy habits.",
                Priority::Low,
            ));
        } else if overall_score < self.thresholds.needs_improvement {
            out.push(Recommendation::new(
                RecommendationCategory::Overall,
                "Your health score indicates areas needing attention. Please consult with your healthcare provider.",
                Priority::High,
            ));
        }
    }
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new(RecommendationThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_rules_need_category_score() {
        let latest = LatestValues::from([(MetricType::BloodPressureSystolic, dec!(150))]);
        let recs = RecommendationGenerator::default().generate(
            &CategoryScores::default(),
            70,
            &latest,
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_bmi_rules_are_exclusive() {
        let scores = CategoryScores {
            metabolic: Some(80),
            ..CategoryScores::default()
        };
        let generator = RecommendationGenerator::default();
        for (bmi, expected) in [
            (dec!(17), Some(Priority::Medium)),
            (dec!(22), None),
            (dec!(27), Some(Priority::Medium)),
            (dec!(31), Some(Priority::High)),
        ] {
            let latest = LatestValues::from([(MetricType::Bmi, bmi)]);
            let recs = generator.generate(&scores, 70, &latest);
            assert_eq!(recs.first().map(|r| r.priority), expected, "bmi {bmi}");
        }
    }

    #[test]
    fn test_glucose_high_threshold_is_inclusive() {
        let scores = CategoryScores {
            metabolic: Some(80),
            ..CategoryScores::default()
        };
        let latest = LatestValues::from([(MetricType::BloodGlucose, dec!(126))]);
        let recs = RecommendationGenerator::default().generate(&scores, 70, &latest);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::High);
    }
}
