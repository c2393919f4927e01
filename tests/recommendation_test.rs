// ABOUTME: Integration tests for rule-based recommendation generation
// ABOUTME: Covers metric rules, priority escalation, low-category escalation, and overall bands
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitalscore::intelligence::recommendation_engine::LatestValues;
use vitalscore::intelligence::RecommendationGenerator;
use vitalscore::models::{
    CategoryScores, MetricType, Priority, Recommendation, RecommendationCategory,
};

fn latest(values: &[(MetricType, Decimal)]) -> LatestValues {
    values.iter().copied().collect()
}

fn in_category(
    recommendations: &[Recommendation],
    category: RecommendationCategory,
) -> Vec<&Recommendation> {
    recommendations
        .iter()
        .filter(|r| r.category == category)
        .collect()
}

#[test]
fn test_blood_pressure_priority_escalates() {
    let generator = RecommendationGenerator::default();
    let scores = CategoryScores {
        cardiovascular: Some(65),
        ..CategoryScores::default()
    };

    let medium = generator.generate(
        &scores,
        65,
        &latest(&[(MetricType::BloodPressureSystolic, dec!(135))]),
    );
    let cardio = in_category(&medium, RecommendationCategory::Cardiovascular);
    assert_eq!(cardio.len(), 1);
    assert_eq!(cardio[0].priority, Priority::Medium);
    assert!(cardio[0].message.contains("blood pressure"));

    let high = generator.generate(
        &scores,
        65,
        &latest(&[(MetricType::BloodPressureSystolic, dec!(141))]),
    );
    assert_eq!(
        in_category(&high, RecommendationCategory::Cardiovascular)[0].priority,
        Priority::High
    );
}

#[test]
fn test_systolic_at_threshold_has_no_advice() {
    let scores = CategoryScores {
        cardiovascular: Some(85),
        ..CategoryScores::default()
    };
    let recommendations = RecommendationGenerator::default().generate(
        &scores,
        85,
        &latest(&[(MetricType::BloodPressureSystolic, dec!(130))]),
    );
    assert!(in_category(&recommendations, RecommendationCategory::Cardiovascular).is_empty());
}

#[test]
fn test_metric_rules_skip_unscored_categories() {
    let scores = CategoryScores {
        lifestyle: Some(100),
        ..CategoryScores::default()
    };
    let recommendations = RecommendationGenerator::default().generate(
        &scores,
        100,
        &latest(&[
            (MetricType::BloodGlucose, dec!(140)),
            (MetricType::SleepHours, dec!(8)),
        ]),
    );

    assert!(in_category(&recommendations, RecommendationCategory::Metabolic).is_empty());
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].category, RecommendationCategory::Overall);
    assert_eq!(recommendations[0].priority, Priority::Low);
}

#[test]
fn test_lifestyle_rules() {
    let scores = CategoryScores {
        lifestyle: Some(70),
        ..CategoryScores::default()
    };
    let recommendations = RecommendationGenerator::default().generate(
        &scores,
        70,
        &latest(&[
            (MetricType::SleepHours, dec!(6)),
            (MetricType::ExerciseMinutes, dec!(10)),
            (MetricType::WaterIntake, dec!(1.5)),
            (MetricType::Steps, dec!(4000)),
        ]),
    );

    let lifestyle = in_category(&recommendations, RecommendationCategory::Lifestyle);
    assert_eq!(lifestyle.len(), 4);
    let water = lifestyle
        .iter()
        .find(|r| r.message.contains("water"))
        .unwrap();
    assert_eq!(water.priority, Priority::Low);
}

#[test]
fn test_low_category_escalates() {
    let scores = CategoryScores {
        cardiovascular: Some(95),
        metabolic: Some(59),
        lifestyle: Some(60),
        vital_signs: Some(40),
    };
    let recommendations =
        RecommendationGenerator::default().generate(&scores, 70, &LatestValues::new());

    let high: Vec<_> = recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .map(|r| r.category)
        .collect();
    assert_eq!(
        high,
        vec![
            RecommendationCategory::Metabolic,
            RecommendationCategory::VitalSigns
        ]
    );
}

#[test]
fn test_overall_bands() {
    let generator = RecommendationGenerator::default();
    let scores = CategoryScores {
        cardiovascular: Some(90),
        ..CategoryScores::default()
    };

    let excellent = generator.generate(&scores, 90, &LatestValues::new());
    assert_eq!(excellent.len(), 1);
    assert_eq!(excellent[0].priority, Priority::Low);

    let middling = generator.generate(&scores, 89, &LatestValues::new());
    assert!(middling.is_empty());

    let poor = CategoryScores {
        cardiovascular: Some(39),
        ..CategoryScores::default()
    };
    let attention = generator.generate(&poor, 39, &LatestValues::new());
    let overall = in_category(&attention, RecommendationCategory::Overall);
    assert_eq!(overall.len(), 1);
    assert_eq!(overall[0].priority, Priority::High);
}

#[test]
fn test_ldl_priority_escalates() {
    let generator = RecommendationGenerator::default();
    let scores = CategoryScores {
        metabolic: Some(70),
        ..CategoryScores::default()
    };
    let ldl = |value: Decimal| {
        generator.generate(&scores, 70, &latest(&[(MetricType::CholesterolLdl, value)]))
    };

    assert!(in_category(&ldl(dec!(130)), RecommendationCategory::Metabolic).is_empty());

    let medium = ldl(dec!(135));
    let metabolic = in_category(&medium, RecommendationCategory::Metabolic);
    assert_eq!(metabolic.len(), 1);
    assert_eq!(metabolic[0].priority, Priority::Medium);
    assert_eq!(
        metabolic[0].message,
        "Your LDL cholesterol is high. Reduce saturated fat intake and increase fiber."
    );

    let at_limit = ldl(dec!(160));
    assert_eq!(
        in_category(&at_limit, RecommendationCategory::Metabolic)[0].priority,
        Priority::Medium
    );

    let high = ldl(dec!(161));
    assert_eq!(
        in_category(&high, RecommendationCategory::Metabolic)[0].priority,
        Priority::High
    );
}

#[test]
fn test_ldl_rule_needs_metabolic_score() {
    let recommendations = RecommendationGenerator::default().generate(
        &CategoryScores::default(),
        70,
        &latest(&[(MetricType::CholesterolLdl, dec!(200))]),
    );

    assert!(in_category(&recommendations, RecommendationCategory::Metabolic).is_empty());
}

#[test]
fn test_elevated_heart_rate() {
    let generator = RecommendationGenerator::default();
    let scores = CategoryScores {
        cardiovascular: Some(75),
        ..CategoryScores::default()
    };
    let heart_rate = |value: Decimal| {
        generator.generate(&scores, 75, &latest(&[(MetricType::HeartRate, value)]))
    };

    assert!(
        in_category(&heart_rate(dec!(100)), RecommendationCategory::Cardiovascular).is_empty()
    );

    let elevated = heart_rate(dec!(101));
    let cardio = in_category(&elevated, RecommendationCategory::Cardiovascular);
    assert_eq!(cardio.len(), 1);
    assert_eq!(cardio[0].priority, Priority::Medium);
    assert_eq!(
        cardio[0].message,
        "Your resting heart rate is elevated. Regular aerobic exercise can help lower it."
    );
}
