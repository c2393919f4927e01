// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample builders, and store/service constructors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `vitalscore`

use std::sync::{Arc, Once};

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use vitalscore::config::ScoringSettings;
use vitalscore::database::{InMemoryStore, SqliteStore};
use vitalscore::models::{MetricSample, MetricType};
use vitalscore::services::HealthScoreService;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Sample recorded `days_ago` days before `now`
pub fn sample_days_ago(
    metric_type: MetricType,
    value: Decimal,
    now: DateTime<Utc>,
    days_ago: i64,
) -> MetricSample {
    MetricSample::new(metric_type, value, now - Duration::days(days_ago))
}

/// Sample recorded one minute ago
pub fn fresh_sample(metric_type: MetricType, value: Decimal) -> MetricSample {
    MetricSample::new(metric_type, value, Utc::now() - Duration::minutes(1))
}

/// Service over a fresh in-memory store with default settings
pub fn memory_service() -> (HealthScoreService, Arc<InMemoryStore>) {
    memory_service_with(ScoringSettings::default())
}

/// Service over a fresh in-memory store with custom settings
pub fn memory_service_with(settings: ScoringSettings) -> (HealthScoreService, Arc<InMemoryStore>) {
    init_test_logging();
    let store = Arc::new(InMemoryStore::new());
    let service = HealthScoreService::new(store.clone(), store.clone(), settings);
    (service, store)
}

/// Standard test database setup
pub async fn create_test_store() -> Result<Arc<SqliteStore>> {
    init_test_logging();
    Ok(Arc::new(SqliteStore::connect("sqlite::memory:").await?))
}

/// Service over a fresh in-memory `SQLite` store
pub async fn sqlite_service() -> Result<(HealthScoreService, Arc<SqliteStore>)> {
    let store = create_test_store().await?;
    let service = HealthScoreService::new(store.clone(), store.clone(), ScoringSettings::default());
    Ok((service, store))
}
