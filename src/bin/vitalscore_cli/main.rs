// ABOUTME: VitalScore CLI - import metrics and compute or inspect health scores from the terminal
// ABOUTME: Thin wrapper over HealthScoreService backed by the SQLite store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Import samples from a JSON array
//! vitalscore-cli import --user 6f1c... --file samples.json
//!
//! # Compute and store a new snapshot
//! vitalscore-cli calculate --user 6f1c...
//!
//! # Show the latest snapshot with trends and recommendations
//! vitalscore-cli latest --user 6f1c...
//!
//! # Show recent snapshots
//! vitalscore-cli history --user 6f1c...
//! ```

mod commands;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use uuid::Uuid;
use vitalscore::config::{DatabaseUrl, ServerConfig};
use vitalscore::database::SqliteStore;
use vitalscore::errors::{AppError, AppResult};
use vitalscore::logging::{LogFormat, LoggingConfig};
use vitalscore::services::HealthScoreService;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "vitalscore-cli",
    about = "VitalScore health score CLI",
    long_about = "Import health metrics and compute, inspect, or list health score snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to DATABASE_URL, then sqlite:./data/vitalscore.db)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Import metric samples from a JSON file
    Import {
        /// User the samples belong to
        #[arg(long)]
        user: Uuid,

        /// JSON array of samples
        #[arg(long)]
        file: PathBuf,

        /// Compute a new snapshot after importing
        #[arg(long)]
        recalculate: bool,
    },

    /// Compute and store a new health score snapshot
    Calculate {
        /// User to score
        #[arg(long)]
        user: Uuid,
    },

    /// Show the latest snapshot with recent metrics and recommendations
    Latest {
        /// User to inspect
        #[arg(long)]
        user: Uuid,
    },

    /// Show recent snapshots, newest first
    History {
        /// User to inspect
        #[arg(long)]
        user: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let logging = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::from_env().with_level(log_level)
    };
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database = DatabaseUrl::parse_url(&url)?;
    } else if env::var("DATABASE_URL").is_err() {
        config.database = DatabaseUrl::parse_url("sqlite:./data/vitalscore.db")?;
    }

    if let DatabaseUrl::SQLite { path } = &config.database {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::internal(format!("Cannot create {}: {e}", parent.display()))
            })?;
        }
    }

    info!("Connecting to database: {}", config.database);
    let store = Arc::new(SqliteStore::connect(&config.database.to_connection_string()).await?);
    let service = HealthScoreService::new(store.clone(), store.clone(), config.scoring);

    match cli.command {
        Command::Import {
            user,
            file,
            recalculate,
        } => {
            commands::metrics::import(store.as_ref(), &service, user, &file, recalculate).await?;
        }
        Command::Calculate { user } => commands::score::calculate(&service, user).await?,
        Command::Latest { user } => commands::score::latest(&service, user).await?,
        Command::History { user } => commands::score::history(&service, user).await?,
    }

    Ok(())
}
