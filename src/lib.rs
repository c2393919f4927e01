// ABOUTME: Main library entry point for the VitalScore health scoring service
// ABOUTME: Wires metric/snapshot stores to the scoring engine and exposes the score operations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # VitalScore
//!
//! Computes a composite 0-100 health score from a user's time-stamped health
//! metrics, classifies the trend of each metric, and emits prioritized
//! recommendations.
//!
//! ## Architecture
//!
//! - **`vitalscore-core`**: domain models, error types, constants
//! - **`vitalscore-intelligence`**: pure scoring, trend, and recommendation logic
//! - **Database**: `MetricStore` / `SnapshotStore` traits with SQLite and in-memory backends
//! - **Services**: `HealthScoreService`, the four operations exposed to collaborators
//! - **Tasks**: fire-and-forget background execution for recalculation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use vitalscore::config::ServerConfig;
//! use vitalscore::database::SqliteStore;
//! use vitalscore::errors::AppResult;
//! use vitalscore::services::HealthScoreService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = Arc::new(SqliteStore::connect(&config.database.to_connection_string()).await?);
//!     let service = HealthScoreService::new(store.clone(), store, config.scoring.clone());
//!
//!     let snapshot = service.calculate_health_score(Uuid::new_v4()).await?;
//!     println!("overall score: {}", snapshot.overall_score);
//!     Ok(())
//! }
//! ```

/// Environment-driven service configuration
pub mod config;

/// Metric and snapshot storage
pub mod database;

/// Unified error handling (re-exported from `vitalscore-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Health score operations exposed to collaborators
pub mod services;

/// Background task execution
pub mod tasks;

pub use vitalscore_core::{constants, models};
pub use vitalscore_intelligence as intelligence;
