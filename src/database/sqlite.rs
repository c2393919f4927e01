// ABOUTME: SQLite metric and snapshot store built on sqlx with schema creation on connect
// ABOUTME: Decimals, ids, and timestamps are stored as text so ordering and precision survive
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;
use vitalscore_core::errors::{AppResult, DatabaseError};
use vitalscore_core::models::{HealthScoreSnapshot, MetricSample, MetricType};

use super::{MetricStore, SnapshotStore};

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// `SQLite`-backed store for samples and snapshots
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database and ensure the schema exists
    ///
    /// In-memory databases use a single long-lived connection, since every
    /// `SQLite` connection to `:memory:` opens a separate database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or schema creation fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
            .create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database_url = %database_url, "Connected to SQLite store");
        Ok(store)
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns `MigrationFailed` if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS health_metrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                metric_type TEXT NOT NULL,
                value TEXT NOT NULL,
                unit TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_health_metrics_user_recorded ON health_metrics(user_id, recorded_at)",
            r"
            CREATE TABLE IF NOT EXISTS health_scores (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                overall_score INTEGER NOT NULL CHECK (overall_score BETWEEN 0 AND 100),
                cardiovascular_score INTEGER,
                metabolic_score INTEGER,
                lifestyle_score INTEGER,
                vital_signs_score INTEGER,
                calculated_at TEXT NOT NULL,
                data_points_count INTEGER NOT NULL,
                period_days INTEGER NOT NULL
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_health_scores_user_calculated ON health_scores(user_id, calculated_at DESC)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl MetricStore for SqliteStore {
    async fn fetch_metric_samples(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<MetricSample>> {
        let rows = sqlx::query(
            r"
            SELECT metric_type, value, unit, recorded_at
            FROM health_metrics
            WHERE user_id = ? AND recorded_at >= ?
            ",
        )
        .bind(user_id.to_string())
        .bind(format_timestamp(since))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        let samples = rows
            .iter()
            .map(row_to_sample)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(user_id = %user_id, count = samples.len(), "Fetched metric samples");
        Ok(samples)
    }

    async fn record_samples(&self, user_id: Uuid, samples: &[MetricSample]) -> AppResult<usize> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        for sample in samples {
            sqlx::query(
                r"
                INSERT INTO health_metrics (user_id, metric_type, value, unit, recorded_at)
                VALUES (?, ?, ?, ?, ?)
                ",
            )
            .bind(user_id.to_string())
            .bind(sample.metric_type.as_str())
            .bind(sample.value.to_string())
            .bind(&sample.unit)
            .bind(format_timestamp(sample.recorded_at))
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::from)?;
        }
        tx.commit().await.map_err(DatabaseError::from)?;
        Ok(samples.len())
    }
}

#[async_trait]
impl SnapshotStore for SqliteStore {
    async fn save_snapshot(
        &self,
        snapshot: &HealthScoreSnapshot,
    ) -> AppResult<HealthScoreSnapshot> {
        // Stored timestamps carry microsecond precision
        let stored = HealthScoreSnapshot {
            calculated_at: snapshot.calculated_at.trunc_subsecs(6),
            ..snapshot.clone()
        };

        sqlx::query(
            r"
            INSERT INTO health_scores (
                id, user_id, overall_score, cardiovascular_score, metabolic_score,
                lifestyle_score, vital_signs_score, calculated_at, data_points_count, period_days
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(stored.id.to_string())
        .bind(stored.user_id.to_string())
        .bind(i64::from(stored.overall_score))
        .bind(stored.cardiovascular_score.map(i64::from))
        .bind(stored.metabolic_score.map(i64::from))
        .bind(stored.lifestyle_score.map(i64::from))
        .bind(stored.vital_signs_score.map(i64::from))
        .bind(format_timestamp(stored.calculated_at))
        .bind(i64::from(stored.data_points_count))
        .bind(i64::from(stored.period_days))
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(stored)
    }

    async fn fetch_latest_snapshot(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<HealthScoreSnapshot>> {
        let row = sqlx::query(
            r"
            SELECT * FROM health_scores
            WHERE user_id = ?
            ORDER BY calculated_at DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.as_ref().map(row_to_snapshot).transpose()?)
    }

    async fn fetch_snapshot_history(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<HealthScoreSnapshot>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM health_scores
            WHERE user_id = ?
            ORDER BY calculated_at DESC
            LIMIT ?
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows
            .iter()
            .map(row_to_snapshot)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

/// Fixed-width UTC text so lexical order matches chronological order
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str, field: &'static str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| DatabaseError::DecodeError {
            field,
            reason: e.to_string(),
        })
}

fn parse_uuid(raw: &str, field: &'static str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(raw).map_err(|e| DatabaseError::DecodeError {
        field,
        reason: e.to_string(),
    })
}

fn decode_u32(row: &SqliteRow, field: &'static str) -> Result<u32, DatabaseError> {
    let raw: i64 = row.try_get(field)?;
    u32::try_from(raw).map_err(|_| DatabaseError::DecodeError {
        field,
        reason: format!("out of range: {raw}"),
    })
}

fn decode_score(row: &SqliteRow, field: &'static str) -> Result<Option<u8>, DatabaseError> {
    let raw: Option<i64> = row.try_get(field)?;
    raw.map(|value| {
        u8::try_from(value)
            .ok()
            .filter(|score| *score <= 100)
            .ok_or_else(|| DatabaseError::DecodeError {
                field,
                reason: format!("score out of range: {value}"),
            })
    })
    .transpose()
}

fn row_to_sample(row: &SqliteRow) -> Result<MetricSample, DatabaseError> {
    let metric_type_str: String = row.try_get("metric_type")?;
    let value_str: String = row.try_get("value")?;
    let unit: String = row.try_get("unit")?;
    let recorded_at_str: String = row.try_get("recorded_at")?;

    let metric_type =
        MetricType::from_str(&metric_type_str).map_err(|e| DatabaseError::DecodeError {
            field: "metric_type",
            reason: e.message,
        })?;
    let value = Decimal::from_str(&value_str).map_err(|e| DatabaseError::DecodeError {
        field: "value",
        reason: e.to_string(),
    })?;

    Ok(MetricSample {
        metric_type,
        value,
        unit,
        recorded_at: parse_timestamp(&recorded_at_str, "recorded_at")?,
    })
}

fn row_to_snapshot(row: &SqliteRow) -> Result<HealthScoreSnapshot, DatabaseError> {
    let id_str: String = row.try_get("id")?;
    let user_id_str: String = row.try_get("user_id")?;
    let calculated_at_str: String = row.try_get("calculated_at")?;

    let overall_score =
        decode_score(row, "overall_score")?.ok_or_else(|| DatabaseError::DecodeError {
            field: "overall_score",
            reason: "missing".to_owned(),
        })?;

    Ok(HealthScoreSnapshot {
        id: parse_uuid(&id_str, "id")?,
        user_id: parse_uuid(&user_id_str, "user_id")?,
        overall_score,
        cardiovascular_score: decode_score(row, "cardiovascular_score")?,
        metabolic_score: decode_score(row, "metabolic_score")?,
        lifestyle_score: decode_score(row, "lifestyle_score")?,
        vital_signs_score: decode_score(row, "vital_signs_score")?,
        calculated_at: parse_timestamp(&calculated_at_str, "calculated_at")?,
        data_points_count: decode_u32(row, "data_points_count")?,
        period_days: decode_u32(row, "period_days")?,
    })
}
