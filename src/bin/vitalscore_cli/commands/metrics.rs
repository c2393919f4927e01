// ABOUTME: Metric import command reading a JSON array of samples into the store
// ABOUTME: Units default to the metric type's standard unit when omitted
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use vitalscore::database::MetricStore;
use vitalscore::errors::{AppError, AppResult};
use vitalscore::models::{MetricSample, MetricType};
use vitalscore::services::HealthScoreService;

use super::score::print_json;

/// One entry of the import file
#[derive(Debug, Deserialize)]
struct ImportRecord {
    metric_type: MetricType,
    value: Decimal,
    unit: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl From<ImportRecord> for MetricSample {
    fn from(record: ImportRecord) -> Self {
        let sample = Self::new(record.metric_type, record.value, record.recorded_at);
        match record.unit {
            Some(unit) => sample.with_unit(unit),
            None => sample,
        }
    }
}

/// Import samples for a user, optionally recomputing the score afterwards
pub async fn import(
    store: &dyn MetricStore,
    service: &HealthScoreService,
    user_id: Uuid,
    file: &Path,
    recalculate: bool,
) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| AppError::invalid_input(format!("Cannot read {}: {e}", file.display())))?;
    let records: Vec<ImportRecord> = serde_json::from_str(&raw)?;
    let samples: Vec<MetricSample> = records.into_iter().map(MetricSample::from).collect();

    let stored = store.record_samples(user_id, &samples).await?;
    info!(user_id = %user_id, count = stored, "Imported metric samples");
    println!("Imported {stored} samples for user {user_id}");

    if recalculate {
        let snapshot = service.calculate_health_score(user_id).await?;
        print_json(&snapshot)?;
    }
    Ok(())
}
