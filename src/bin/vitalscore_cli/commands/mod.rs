// ABOUTME: Command implementations for vitalscore-cli
// ABOUTME: Metric import and score calculation/inspection commands

pub mod metrics;
pub mod score;
