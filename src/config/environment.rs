// ABOUTME: Environment-based service configuration for storage location and scoring windows
// ABOUTME: Parses DATABASE_URL and HEALTH_SCORE_* variables into a validated ServerConfig
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;
use vitalscore_core::constants::scoring;
use vitalscore_core::errors::{AppError, AppResult};
use vitalscore_intelligence::HealthScoreConfig;

/// Default connection string when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Type-safe database location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    #[default]
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Bare paths are treated as `SQLite` files.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or non-`SQLite` schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::invalid_input("Database URL must not be empty"));
        }

        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            return if path == ":memory:" || path.is_empty() {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path),
                })
            };
        }

        if s.contains("://") {
            return Err(AppError::invalid_input(format!(
                "Unsupported database URL scheme: {s}"
            )));
        }

        if s == ":memory:" {
            return Ok(Self::Memory);
        }

        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Connection string understood by `sqlx`
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => DEFAULT_DATABASE_URL.to_owned(),
        }
    }

    /// Whether this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_connection_string())
    }
}

/// Scoring windows plus the engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Observation window for score computation (days)
    pub period_days: u32,
    /// Maximum snapshots returned by history queries
    pub history_limit: usize,
    /// Weights, recommendation bands, and trend windows
    pub health_score: HealthScoreConfig,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            period_days: scoring::DEFAULT_PERIOD_DAYS,
            history_limit: scoring::DEFAULT_HISTORY_LIMIT,
            health_score: HealthScoreConfig::default(),
        }
    }
}

impl ScoringSettings {
    /// Load scoring settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or out of range
    pub fn from_env() -> AppResult<Self> {
        let settings = Self {
            period_days: env_parse("HEALTH_SCORE_PERIOD_DAYS", scoring::DEFAULT_PERIOD_DAYS)?,
            history_limit: env_parse(
                "HEALTH_SCORE_HISTORY_LIMIT",
                scoring::DEFAULT_HISTORY_LIMIT,
            )?,
            health_score: HealthScoreConfig::load()?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validate window sizes
    ///
    /// # Errors
    ///
    /// Returns an error if the period or history limit is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.period_days == 0 {
            return Err(AppError::config("HEALTH_SCORE_PERIOD_DAYS must be at least 1"));
        }
        if self.history_limit == 0 {
            return Err(AppError::config(
                "HEALTH_SCORE_HISTORY_LIMIT must be at least 1",
            ));
        }
        self.health_score.validate()?;
        Ok(())
    }
}

/// Service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Where metrics and snapshots are stored
    pub database: DatabaseUrl,
    /// Scoring windows and engine configuration
    pub scoring: ScoringSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is malformed or fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let config = Self {
            database: DatabaseUrl::parse_url(&database_url)?,
            scoring: ScoringSettings::from_env()?,
        };

        info!(
            database = %config.database,
            period_days = config.scoring.period_days,
            history_limit = config.scoring.history_limit,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Parse an environment variable, falling back to a default when unset
fn env_parse<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_variants() {
        assert_eq!(DatabaseUrl::parse_url("sqlite::memory:").unwrap(), DatabaseUrl::Memory);
        assert_eq!(DatabaseUrl::parse_url(":memory:").unwrap(), DatabaseUrl::Memory);
    }

    #[test]
    fn test_parse_file_paths() {
        let url = DatabaseUrl::parse_url("sqlite:./data/vitalscore.db").unwrap();
        assert_eq!(url.to_connection_string(), "sqlite:./data/vitalscore.db");

        let bare = DatabaseUrl::parse_url("scores.db").unwrap();
        assert_eq!(
            bare,
            DatabaseUrl::SQLite {
                path: PathBuf::from("scores.db")
            }
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(DatabaseUrl::parse_url("postgres://localhost/db").is_err());
        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_zero_period_is_invalid() {
        let settings = ScoringSettings {
            period_days: 0,
            ..ScoringSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
