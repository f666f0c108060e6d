//! Test utilities and helpers for unit and integration testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock input and record factories
//! - History seeding
//! - Helper assertions

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::models::{ReadinessStatus, RecoveryInput, RecoveryMetrics};
use crate::repository::{RecoveryRepository, SqliteRecoveryRepository};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed one record per day for `user_id`, ending on `latest` and walking
/// backwards. `scores[0]` lands on `latest`.
pub async fn seed_scores(pool: &SqlitePool, user_id: &str, latest: NaiveDate, scores: &[i64]) {
  let repo = SqliteRecoveryRepository::new(pool.clone());

  for (i, &score) in scores.iter().enumerate() {
    let day = latest - Duration::days(i as i64);
    repo
      .save(&mock_metrics(user_id, day, score))
      .await
      .expect("Failed to seed recovery record");
  }
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Input with the same level for fatigue, soreness and stress
pub fn mock_input(sleep_hours: f64, sleep_quality: f64, level: f64) -> RecoveryInput {
  RecoveryInput {
    sleep_hours,
    sleep_quality,
    fatigue_level: level,
    soreness_level: level,
    stress_level: level,
  }
}

/// Scores 84 / good
pub fn well_recovered_input() -> RecoveryInput {
  mock_input(8.0, 8.0, 2.0)
}

/// Scores 17 / rest_needed, fatigue is the weakest factor
pub fn depleted_input() -> RecoveryInput {
  RecoveryInput {
    sleep_hours: 4.0,
    sleep_quality: 2.0,
    fatigue_level: 9.0,
    soreness_level: 8.0,
    stress_level: 8.0,
  }
}

/// A stored record with the given score; status follows the score
pub fn mock_metrics(user_id: &str, date: NaiveDate, score: i64) -> RecoveryMetrics {
  let score = score.clamp(0, 100);
  RecoveryMetrics {
    user_id: user_id.to_string(),
    date,
    sleep_hours: 7.5,
    sleep_quality: 7.0,
    fatigue_level: 3.0,
    soreness_level: 3.0,
    stress_level: 4.0,
    recovery_score: score,
    readiness_status: ReadinessStatus::from_score(score as u8),
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'recovery_metrics'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_scores_writes_consecutive_days() {
    let pool = setup_test_db().await;

    seed_scores(&pool, "athlete-1", date(2025, 3, 10), &[80, 70, 60]).await;

    let rows: Vec<(NaiveDate, i64)> = sqlx::query_as(
      "SELECT date, recovery_score FROM recovery_metrics ORDER BY date DESC",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to read rows");

    assert_eq!(
      rows,
      vec![
        (date(2025, 3, 10), 80),
        (date(2025, 3, 9), 70),
        (date(2025, 3, 8), 60),
      ]
    );

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    assert!(well_recovered_input().validate().is_ok());
    assert!(depleted_input().validate().is_ok());

    let record = mock_metrics("athlete-1", date(2025, 3, 10), 55);
    assert_eq!(record.readiness_status, ReadinessStatus::Moderate);
    assert!(record.input().validate().is_ok());
  }
}
