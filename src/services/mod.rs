// ABOUTME: Domain services exposed to collaborators such as HTTP handlers and the CLI
// ABOUTME: Services orchestrate stores and the scoring engine without owning transport concerns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Health score calculation, recalculation, and retrieval
pub mod health_score;

pub use health_score::HealthScoreService;
