// ABOUTME: Core types and constants for the VitalScore health scoring platform
// ABOUTME: Foundation crate with error handling, metric models, and scoring constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # VitalScore Core
//!
//! Foundation crate providing shared types and constants for the VitalScore
//! health scoring platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Scoring windows, category weights, and recommendation thresholds
//! - **models**: Metric samples, health score snapshots, trends, and recommendations

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MetricType`, `MetricSample`, `HealthScoreSnapshot`, etc.)
pub mod models;
