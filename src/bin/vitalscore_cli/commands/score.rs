// ABOUTME: Score commands: calculate a new snapshot, show the latest, list history
// ABOUTME: Results are printed as pretty JSON on stdout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::Serialize;
use uuid::Uuid;
use vitalscore::errors::AppResult;
use vitalscore::services::HealthScoreService;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Compute and store a new snapshot
pub async fn calculate(service: &HealthScoreService, user_id: Uuid) -> AppResult<()> {
    let snapshot = service.calculate_health_score(user_id).await?;
    print_json(&snapshot)
}

/// Show the latest enriched snapshot
pub async fn latest(service: &HealthScoreService, user_id: Uuid) -> AppResult<()> {
    let report = service.get_latest_health_score(user_id).await?;
    print_json(&report)
}

/// Show recent enriched snapshots
pub async fn history(service: &HealthScoreService, user_id: Uuid) -> AppResult<()> {
    let reports = service.get_health_score_history(user_id).await?;
    if reports.is_empty() {
        println!("No health scores recorded for user {user_id}");
        return Ok(());
    }
    print_json(&reports)
}
