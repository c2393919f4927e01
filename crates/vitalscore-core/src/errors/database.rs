// ABOUTME: Structured error types for metric and snapshot storage operations
// ABOUTME: Converts storage failures into the unified AppError
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by metric and snapshot stores
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or reach the backing database
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema creation failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A query failed to execute
    #[error("Query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// A stored row could not be decoded into a domain type
    #[error("Failed to decode {field}: {reason}")]
    DecodeError {
        /// Column or field name
        field: &'static str,
        /// Decoder message
        reason: String,
    },
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        Self::new(ErrorCode::DatabaseError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionFailed(error.to_string())
            }
            sqlx::Error::ColumnDecode { index, source } => Self::DecodeError {
                field: "column",
                reason: format!("{index}: {source}"),
            },
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
