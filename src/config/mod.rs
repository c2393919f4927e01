// ABOUTME: Configuration module for storage location and scoring settings
// ABOUTME: Everything is environment-driven; there are no configuration files
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration for the VitalScore service
//!
//! - **Environment**: `DATABASE_URL`, `HEALTH_SCORE_PERIOD_DAYS`, `HEALTH_SCORE_HISTORY_LIMIT`
//! - **Engine**: weights, recommendation bands, and trend windows via
//!   [`HealthScoreConfig`] and its `HEALTH_SCORE_*` overrides

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, ScoringSettings, ServerConfig};
pub use vitalscore_intelligence::HealthScoreConfig;
