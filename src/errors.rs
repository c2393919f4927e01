// ABOUTME: Unified error handling for the VitalScore service
// ABOUTME: Re-exports the core error types so binaries and tests share one import path
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling
//!
//! Every fallible operation returns [`AppResult`]. Storage failures surface as
//! [`DatabaseError`] and convert into [`AppError`] with `ErrorCode::DatabaseError`;
//! an empty observation window surfaces as `ErrorCode::InsufficientData`.

pub use vitalscore_core::errors::{
    AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse,
};
