// ABOUTME: Integration tests for the SQLite metric and snapshot store
// ABOUTME: Covers persistence round trips, time filtering, ordering, and file-backed reopen
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{create_test_store, sample_days_ago};
use rust_decimal_macros::dec;
use uuid::Uuid;
use vitalscore::database::{MetricStore, SnapshotStore, SqliteStore};
use vitalscore::models::{CategoryScores, HealthScoreSnapshot, MetricSample, MetricType};

fn snapshot(user_id: Uuid, overall_score: u8, hours_ago: i64) -> HealthScoreSnapshot {
    let categories = CategoryScores {
        cardiovascular: Some(overall_score),
        ..CategoryScores::default()
    };
    let mut snapshot = HealthScoreSnapshot::new(user_id, overall_score, &categories, 4, 90);
    snapshot.calculated_at = Utc::now() - Duration::hours(hours_ago);
    snapshot
}

#[tokio::test]
async fn test_samples_round_trip_with_precision() {
    let store = create_test_store().await.unwrap();
    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let samples = vec![
        sample_days_ago(MetricType::BodyTemperature, dec!(36.85), now, 1),
        sample_days_ago(MetricType::HbA1c, dec!(5.4), now, 2).with_unit("percent"),
    ];

    let stored = store.record_samples(user_id, &samples).await.unwrap();
    assert_eq!(stored, 2);

    let mut fetched = store
        .fetch_metric_samples(user_id, now - Duration::days(7))
        .await
        .unwrap();
    fetched.sort_by_key(|s| s.recorded_at);

    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].metric_type, MetricType::HbA1c);
    assert_eq!(fetched[0].value, dec!(5.4));
    assert_eq!(fetched[0].unit, "percent");
    assert_eq!(fetched[1].value, dec!(36.85));
    assert_eq!(fetched[1].unit, "°C");
}

#[tokio::test]
async fn test_fetch_filters_by_user_and_since() {
    let store = create_test_store().await.unwrap();
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();
    let now = Utc::now();

    store
        .record_samples(
            user_id,
            &[
                sample_days_ago(MetricType::Steps, dec!(8000), now, 100),
                sample_days_ago(MetricType::Steps, dec!(9000), now, 5),
            ],
        )
        .await
        .unwrap();
    store
        .record_samples(
            other_user,
            &[sample_days_ago(MetricType::Steps, dec!(1000), now, 1)],
        )
        .await
        .unwrap();

    let fetched = store
        .fetch_metric_samples(user_id, now - Duration::days(90))
        .await
        .unwrap();

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].value, dec!(9000));
}

#[tokio::test]
async fn test_empty_batch_records_nothing() {
    let store = create_test_store().await.unwrap();
    let user_id = Uuid::new_v4();

    let stored = store.record_samples(user_id, &[]).await.unwrap();

    assert_eq!(stored, 0);
    assert!(store
        .fetch_metric_samples(user_id, Utc::now() - Duration::days(1))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_snapshot_round_trip() {
    let store = create_test_store().await.unwrap();
    let user_id = Uuid::new_v4();

    let saved = store.save_snapshot(&snapshot(user_id, 77, 0)).await.unwrap();
    let latest = store.fetch_latest_snapshot(user_id).await.unwrap().unwrap();

    assert_eq!(latest, saved);
    assert_eq!(latest.cardiovascular_score, Some(77));
    assert_eq!(latest.metabolic_score, None);
    assert_eq!(latest.data_points_count, 4);
}

#[tokio::test]
async fn test_latest_for_unknown_user_is_none() {
    let store = create_test_store().await.unwrap();

    assert!(store
        .fetch_latest_snapshot(Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_history_orders_newest_first() {
    let store = create_test_store().await.unwrap();
    let user_id = Uuid::new_v4();

    // Inserted out of order on purpose
    for (score, hours_ago) in [(60, 24), (80, 1), (70, 12)] {
        store
            .save_snapshot(&snapshot(user_id, score, hours_ago))
            .await
            .unwrap();
    }

    let history = store.fetch_snapshot_history(user_id, 10).await.unwrap();
    let scores: Vec<u8> = history.iter().map(|s| s.overall_score).collect();
    assert_eq!(scores, vec![80, 70, 60]);

    let limited = store.fetch_snapshot_history(user_id, 2).await.unwrap();
    assert_eq!(limited.len(), 2);

    let latest = store.fetch_latest_snapshot(user_id).await.unwrap().unwrap();
    assert_eq!(latest.overall_score, 80);
}

#[tokio::test]
async fn test_file_backed_store_persists_across_connections() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("scores.db").display());
    let user_id = Uuid::new_v4();

    let saved = {
        let store = SqliteStore::connect(&url).await.unwrap();
        store
            .record_samples(
                user_id,
                &[MetricSample::new(MetricType::HeartRate, dec!(62), Utc::now())],
            )
            .await
            .unwrap();
        let saved = store.save_snapshot(&snapshot(user_id, 95, 0)).await.unwrap();
        store.pool().close().await;
        saved
    };

    let reopened = SqliteStore::connect(&url).await.unwrap();
    let latest = reopened.fetch_latest_snapshot(user_id).await.unwrap();
    assert_eq!(latest, Some(saved));
    assert_eq!(
        reopened
            .fetch_metric_samples(user_id, Utc::now() - Duration::days(1))
            .await
            .unwrap()
            .len(),
        1
    );
}
