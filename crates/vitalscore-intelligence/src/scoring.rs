// ABOUTME: Fixed per-metric threshold tables mapping a window mean to a 0-100 sub-score
// ABOUTME: Buckets are evaluated top-down; a catch-all score keeps every lookup total
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Metric Scorer
//!
//! Every scored metric type owns an ordered list of buckets. The first bucket
//! whose bound contains the value wins; values matched by no bucket fall to the
//! table's catch-all score. Extreme, negative, or otherwise implausible inputs
//! therefore degrade to a low score instead of failing.
//!
//! The breakpoints follow common clinical guidance (AHA blood pressure stages,
//! ADA glucose/HbA1c cut-offs, NCEP ATP III lipid bands, WHO BMI classes,
//! NSF sleep duration ranges) and are part of the scoring contract.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitalscore_core::models::MetricType;

/// Condition a value must satisfy to land in a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value < limit`
    Below(Decimal),
    /// `value <= limit`
    AtMost(Decimal),
    /// `value >= limit`
    AtLeast(Decimal),
    /// `low <= value <= high`
    Between(Decimal, Decimal),
}

impl Bound {
    /// Whether `value` satisfies this bound
    #[must_use]
    pub fn contains(self, value: Decimal) -> bool {
        match self {
            Self::Below(limit) => value < limit,
            Self::AtMost(limit) => value <= limit,
            Self::AtLeast(limit) => value >= limit,
            Self::Between(low, high) => low <= value && value <= high,
        }
    }
}

/// One row of a threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Matching condition
    pub bound: Bound,
    /// Sub-score when matched
    pub score: u8,
}

impl Bucket {
    const fn below(limit: Decimal, score: u8) -> Self {
        Self {
            bound: Bound::Below(limit),
            score,
        }
    }

    const fn at_most(limit: Decimal, score: u8) -> Self {
        Self {
            bound: Bound::AtMost(limit),
            score,
        }
    }

    const fn at_least(limit: Decimal, score: u8) -> Self {
        Self {
            bound: Bound::AtLeast(limit),
            score,
        }
    }

    const fn between(low: Decimal, high: Decimal, score: u8) -> Self {
        Self {
            bound: Bound::Between(low, high),
            score,
        }
    }
}

/// Ordered buckets plus a catch-all score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdTable {
    buckets: &'static [Bucket],
    fallback: u8,
}

impl ThresholdTable {
    /// Score a value; never fails
    #[must_use]
    pub fn score(&self, value: Decimal) -> u8 {
        self.buckets
            .iter()
            .find(|bucket| bucket.bound.contains(value))
            .map_or(self.fallback, |bucket| bucket.score)
    }

    /// Buckets in evaluation order
    #[must_use]
    pub const fn buckets(&self) -> &'static [Bucket] {
        self.buckets
    }

    /// Score used when no bucket matches
    #[must_use]
    pub const fn fallback(&self) -> u8 {
        self.fallback
    }
}

// Cardiovascular

const SYSTOLIC_BP: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(90), 40),
        Bucket::at_most(dec!(120), 100),
        Bucket::at_most(dec!(129), 85),
        Bucket::at_most(dec!(139), 65),
        Bucket::at_most(dec!(159), 45),
        Bucket::at_most(dec!(179), 25),
    ],
    fallback: 10,
};

const DIASTOLIC_BP: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(60), 40),
        Bucket::at_most(dec!(80), 100),
        Bucket::at_most(dec!(89), 70),
        Bucket::at_most(dec!(99), 45),
        Bucket::at_most(dec!(119), 25),
    ],
    fallback: 10,
};

const HEART_RATE: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(40), 30),
        Bucket::at_most(dec!(60), 95),
        Bucket::at_most(dec!(100), 100),
        Bucket::at_most(dec!(110), 75),
        Bucket::at_most(dec!(120), 50),
    ],
    fallback: 25,
};

const OXYGEN_SATURATION: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::at_least(dec!(95), 100),
        Bucket::at_least(dec!(90), 75),
        Bucket::at_least(dec!(85), 40),
    ],
    fallback: 15,
};

// Metabolic

const BMI: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(18.5), 60),
        Bucket::at_most(dec!(24.9), 100),
        Bucket::at_most(dec!(29.9), 70),
        Bucket::at_most(dec!(34.9), 45),
        Bucket::at_most(dec!(39.9), 25),
    ],
    fallback: 10,
};

const BLOOD_GLUCOSE: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(70), 50),
        Bucket::at_most(dec!(100), 100),
        Bucket::at_most(dec!(125), 60),
        Bucket::at_most(dec!(150), 35),
    ],
    fallback: 15,
};

const HBA1C: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(5.7), 100),
        Bucket::at_most(dec!(6.4), 65),
        Bucket::at_most(dec!(7.0), 45),
        Bucket::at_most(dec!(8.0), 30),
    ],
    fallback: 15,
};

const CHOLESTEROL_TOTAL: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(200), 100),
        Bucket::at_most(dec!(239), 70),
        Bucket::at_most(dec!(279), 45),
    ],
    fallback: 25,
};

const CHOLESTEROL_LDL: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(100), 100),
        Bucket::at_most(dec!(129), 85),
        Bucket::at_most(dec!(159), 65),
        Bucket::at_most(dec!(189), 40),
    ],
    fallback: 20,
};

// HDL is the one lipid where higher is healthier
const CHOLESTEROL_HDL: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::at_least(dec!(60), 100),
        Bucket::at_least(dec!(50), 80),
        Bucket::at_least(dec!(40), 60),
    ],
    fallback: 35,
};

const TRIGLYCERIDES: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::below(dec!(150), 100),
        Bucket::at_most(dec!(199), 75),
        Bucket::at_most(dec!(499), 45),
    ],
    fallback: 20,
};

// Lifestyle

const SLEEP_HOURS: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::between(dec!(7), dec!(9), 100),
        Bucket::between(dec!(6), dec!(10), 80),
        Bucket::between(dec!(5), dec!(11), 55),
    ],
    fallback: 30,
};

const EXERCISE_MINUTES: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::at_least(dec!(30), 100),
        Bucket::at_least(dec!(22), 85),
        Bucket::at_least(dec!(15), 65),
        Bucket::at_least(dec!(10), 45),
    ],
    fallback: 25,
};

const WATER_INTAKE: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::between(dec!(2.0), dec!(3.5), 100),
        Bucket::between(dec!(1.5), dec!(4.0), 80),
        Bucket::at_least(dec!(1.0), 55),
    ],
    fallback: 30,
};

const STEPS: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::at_least(dec!(10000), 100),
        Bucket::at_least(dec!(7500), 85),
        Bucket::at_least(dec!(5000), 65),
        Bucket::at_least(dec!(2500), 45),
    ],
    fallback: 25,
};

// Vital signs

const BODY_TEMPERATURE: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::between(dec!(36.5), dec!(37.5), 100),
        Bucket::between(dec!(36.0), dec!(38.0), 75),
        Bucket::between(dec!(35.5), dec!(38.5), 45),
    ],
    fallback: 20,
};

const RESPIRATORY_RATE: ThresholdTable = ThresholdTable {
    buckets: &[
        Bucket::between(dec!(12), dec!(20), 100),
        Bucket::between(dec!(10), dec!(24), 70),
        Bucket::between(dec!(8), dec!(28), 40),
    ],
    fallback: 20,
};

/// Maps a metric type and value to its sub-score
pub struct MetricScorer;

impl MetricScorer {
    /// Threshold table for a metric type
    ///
    /// `WEIGHT` and `HEIGHT` are recorded for context only and have no table.
    #[must_use]
    pub const fn table(metric_type: MetricType) -> Option<ThresholdTable> {
        match metric_type {
            MetricType::BloodPressureSystolic => Some(SYSTOLIC_BP),
            MetricType::BloodPressureDiastolic => Some(DIASTOLIC_BP),
            MetricType::HeartRate => Some(HEART_RATE),
            MetricType::OxygenSaturation => Some(OXYGEN_SATURATION),
            MetricType::Bmi => Some(BMI),
            MetricType::BloodGlucose => Some(BLOOD_GLUCOSE),
            MetricType::HbA1c => Some(HBA1C),
            MetricType::CholesterolTotal => Some(CHOLESTEROL_TOTAL),
            MetricType::CholesterolLdl => Some(CHOLESTEROL_LDL),
            MetricType::CholesterolHdl => Some(CHOLESTEROL_HDL),
            MetricType::Triglycerides => Some(TRIGLYCERIDES),
            MetricType::SleepHours => Some(SLEEP_HOURS),
            MetricType::ExerciseMinutes => Some(EXERCISE_MINUTES),
            MetricType::WaterIntake => Some(WATER_INTAKE),
            MetricType::Steps => Some(STEPS),
            MetricType::BodyTemperature => Some(BODY_TEMPERATURE),
            MetricType::RespiratoryRate => Some(RESPIRATORY_RATE),
            MetricType::Weight | MetricType::Height => None,
        }
    }

    /// Sub-score (0-100) for a metric value, or `None` for unscored metric types
    #[must_use]
    pub fn score(metric_type: MetricType, value: Decimal) -> Option<u8> {
        Self::table(metric_type).map(|table| table.score(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_edges() {
        assert!(Bound::Below(dec!(90)).contains(dec!(89.99)));
        assert!(!Bound::Below(dec!(90)).contains(dec!(90)));
        assert!(Bound::AtMost(dec!(120)).contains(dec!(120)));
        assert!(Bound::AtLeast(dec!(95)).contains(dec!(95)));
        assert!(Bound::Between(dec!(7), dec!(9)).contains(dec!(9)));
        assert!(!Bound::Between(dec!(7), dec!(9)).contains(dec!(9.01)));
    }

    #[test]
    fn test_every_table_stays_within_range() {
        for metric_type in MetricType::ALL {
            let Some(table) = MetricScorer::table(metric_type) else {
                continue;
            };
            assert!(table.fallback() <= 100, "{metric_type}");
            assert!(!table.buckets().is_empty(), "{metric_type}");
            for bucket in table.buckets() {
                assert!(bucket.score <= 100, "{metric_type}");
            }
        }
    }

    #[test]
    fn test_only_weight_and_height_are_unscored() {
        let unscored: Vec<_> = MetricType::ALL
            .into_iter()
            .filter(|m| MetricScorer::table(*m).is_none())
            .collect();
        assert_eq!(unscored, vec![MetricType::Weight, MetricType::Height]);
    }
}
