// ABOUTME: Health metric types, score categories, and time-stamped metric samples
// ABOUTME: Static metadata (category, unit, direction) for every supported metric type
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Score category grouping several metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Blood pressure, heart rate, oxygen saturation
    Cardiovascular,
    /// Body composition, glucose, lipids
    Metabolic,
    /// Sleep, exercise, hydration, steps
    Lifestyle,
    /// Body temperature, respiratory rate
    VitalSigns,
}

impl Category {
    /// Every category, in reporting order
    pub const ALL: [Self; 4] = [
        Self::Cardiovascular,
        Self::Metabolic,
        Self::Lifestyle,
        Self::VitalSigns,
    ];

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardiovascular => "cardiovascular",
            Self::Metabolic => "metabolic",
            Self::Lifestyle => "lifestyle",
            Self::VitalSigns => "vital_signs",
        }
    }

    /// Metric types that belong to this category
    pub fn metric_types(self) -> impl Iterator<Item = MetricType> {
        MetricType::ALL
            .into_iter()
            .filter(move |metric_type| metric_type.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of health metrics the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    /// Systolic blood pressure (mmHg)
    BloodPressureSystolic,
    /// Diastolic blood pressure (mmHg)
    BloodPressureDiastolic,
    /// Resting heart rate (bpm)
    HeartRate,
    /// Blood oxygen saturation (%)
    OxygenSaturation,
    /// Body weight (kg)
    Weight,
    /// Body height (cm)
    Height,
    /// Body mass index (kg/m²)
    Bmi,
    /// Fasting blood glucose (mg/dL)
    BloodGlucose,
    /// Glycated haemoglobin (%)
    #[serde(rename = "HBA1C")]
    HbA1c,
    /// Total cholesterol (mg/dL)
    CholesterolTotal,
    /// LDL cholesterol (mg/dL)
    CholesterolLdl,
    /// HDL cholesterol (mg/dL)
    CholesterolHdl,
    /// Triglycerides (mg/dL)
    Triglycerides,
    /// Body temperature (°C)
    BodyTemperature,
    /// Respiratory rate (breaths/min)
    RespiratoryRate,
    /// Sleep duration (hours)
    SleepHours,
    /// Exercise duration per day (minutes)
    ExerciseMinutes,
    /// Water intake (liters)
    WaterIntake,
    /// Steps per day
    Steps,
}

impl MetricType {
    /// Every metric type, in declaration order
    pub const ALL: [Self; 19] = [
        Self::BloodPressureSystolic,
        Self::BloodPressureDiastolic,
        Self::HeartRate,
        Self::OxygenSaturation,
        Self::Weight,
        Self::Height,
        Self::Bmi,
        Self::BloodGlucose,
        Self::HbA1c,
        Self::CholesterolTotal,
        Self::CholesterolLdl,
        Self::CholesterolHdl,
        Self::Triglycerides,
        Self::BodyTemperature,
        Self::RespiratoryRate,
        Self::SleepHours,
        Self::ExerciseMinutes,
        Self::WaterIntake,
        Self::Steps,
    ];

    /// Category this metric contributes to
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::BloodPressureSystolic
            | Self::BloodPressureDiastolic
            | Self::HeartRate
            | Self::OxygenSaturation => Category::Cardiovascular,
            Self::Weight
            | Self::Height
            | Self::Bmi
            | Self::BloodGlucose
            | Self::HbA1c
            | Self::CholesterolTotal
            | Self::CholesterolLdl
            | Self::CholesterolHdl
            | Self::Triglycerides => Category::Metabolic,
            Self::BodyTemperature | Self::RespiratoryRate => Category::VitalSigns,
            Self::SleepHours | Self::ExerciseMinutes | Self::WaterIntake | Self::Steps => {
                Category::Lifestyle
            }
        }
    }

    /// Whether a smaller value is physiologically preferable
    #[must_use]
    pub const fn is_lower_better(self) -> bool {
        matches!(
            self,
            Self::BloodPressureSystolic
                | Self::BloodPressureDiastolic
                | Self::BloodGlucose
                | Self::CholesterolLdl
                | Self::Triglycerides
        )
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BloodPressureSystolic => "Blood Pressure (Systolic)",
            Self::BloodPressureDiastolic => "Blood Pressure (Diastolic)",
            Self::HeartRate => "Heart Rate",
            Self::OxygenSaturation => "Oxygen Saturation",
            Self::Weight => "Weight",
            Self::Height => "Height",
            Self::Bmi => "Body Mass Index",
            Self::BloodGlucose => "Blood Glucose",
            Self::HbA1c => "HbA1c",
            Self::CholesterolTotal => "Total Cholesterol",
            Self::CholesterolLdl => "LDL Cholesterol",
            Self::CholesterolHdl => "HDL Cholesterol",
            Self::Triglycerides => "Triglycerides",
            Self::BodyTemperature => "Body Temperature",
            Self::RespiratoryRate => "Respiratory Rate",
            Self::SleepHours => "Sleep Duration",
            Self::ExerciseMinutes => "Exercise Duration",
            Self::WaterIntake => "Water Intake",
            Self::Steps => "Steps",
        }
    }

    /// Unit used when a sample does not carry one
    #[must_use]
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::BloodPressureSystolic | Self::BloodPressureDiastolic => "mmHg",
            Self::HeartRate => "bpm",
            Self::OxygenSaturation | Self::HbA1c => "%",
            Self::Weight => "kg",
            Self::Height => "cm",
            Self::Bmi => "kg/m²",
            Self::BloodGlucose
            | Self::CholesterolTotal
            | Self::CholesterolLdl
            | Self::CholesterolHdl
            | Self::Triglycerides => "mg/dL",
            Self::BodyTemperature => "°C",
            Self::RespiratoryRate => "breaths/min",
            Self::SleepHours => "hours",
            Self::ExerciseMinutes => "minutes",
            Self::WaterIntake => "liters",
            Self::Steps => "steps",
        }
    }

    /// Stable wire/storage name (matches the serde representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BloodPressureSystolic => "BLOOD_PRESSURE_SYSTOLIC",
            Self::BloodPressureDiastolic => "BLOOD_PRESSURE_DIASTOLIC",
            Self::HeartRate => "HEART_RATE",
            Self::OxygenSaturation => "OXYGEN_SATURATION",
            Self::Weight => "WEIGHT",
            Self::Height => "HEIGHT",
            Self::Bmi => "BMI",
            Self::BloodGlucose => "BLOOD_GLUCOSE",
            Self::HbA1c => "HBA1C",
            Self::CholesterolTotal => "CHOLESTEROL_TOTAL",
            Self::CholesterolLdl => "CHOLESTEROL_LDL",
            Self::CholesterolHdl => "CHOLESTEROL_HDL",
            Self::Triglycerides => "TRIGLYCERIDES",
            Self::BodyTemperature => "BODY_TEMPERATURE",
            Self::RespiratoryRate => "RESPIRATORY_RATE",
            Self::SleepHours => "SLEEP_HOURS",
            Self::ExerciseMinutes => "EXERCISE_MINUTES",
            Self::WaterIntake => "WATER_INTAKE",
            Self::Steps => "STEPS",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric_type| metric_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown metric type: {s}")))
    }
}

/// A single recorded metric value
///
/// Samples are owned by the metric store; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Which metric was measured
    pub metric_type: MetricType,
    /// Measured value
    pub value: Decimal,
    /// Unit of measurement
    pub unit: String,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
}

impl MetricSample {
    /// Create a sample using the metric type's default unit
    #[must_use]
    pub fn new(metric_type: MetricType, value: Decimal, recorded_at: DateTime<Utc>) -> Self {
        Self {
            metric_type,
            value,
            unit: metric_type.default_unit().to_owned(),
            recorded_at,
        }
    }

    /// Override the unit of measurement
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}
