// ABOUTME: Fire-and-forget background task execution with a logging-only failure sink
// ABOUTME: Callers submit work and return immediately; failures are logged, never propagated
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::future::Future;
use std::pin::Pin;

use tokio::runtime::Handle;
use tracing::{debug, error};
use vitalscore_core::errors::AppResult;

/// Boxed unit of background work
pub type BackgroundTask = Pin<Box<dyn Future<Output = AppResult<()>> + Send + 'static>>;

/// Executor abstraction for background work
///
/// Implementations must not block the caller and must not surface task
/// failures to it.
pub trait TaskSpawner: Send + Sync {
    /// Submit a named task
    fn spawn(&self, name: &'static str, task: BackgroundTask);
}

/// Runs tasks on the ambient Tokio runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTaskSpawner;

impl TaskSpawner for TokioTaskSpawner {
    fn spawn(&self, name: &'static str, task: BackgroundTask) {
        let Ok(handle) = Handle::try_current() else {
            error!(task = name, "No Tokio runtime available, background task dropped");
            return;
        };

        handle.spawn(async move {
            match task.await {
                Ok(()) => debug!(task = name, "Background task completed"),
                Err(e) => error!(task = name, error = %e, "Background task failed"),
            }
        });
    }
}
