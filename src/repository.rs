//! Persistence boundary for daily recovery records
//!
//! The engine only talks to `RecoveryRepository`; `SqliteRecoveryRepository` is
//! the store-backed implementation. One row per (user_id, date): saving again on
//! the same day replaces the row.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::DbPool;
use crate::error::RecoveryError;
use crate::models::RecoveryMetrics;

#[async_trait]
pub trait RecoveryRepository: Send + Sync {
  /// Insert or replace the record for (user_id, date). Last write wins.
  async fn save(&self, record: &RecoveryMetrics) -> Result<(), RecoveryError>;

  async fn find_by_date(
    &self,
    user_id: &str,
    date: NaiveDate,
  ) -> Result<Option<RecoveryMetrics>, RecoveryError>;

  /// Records with `from <= date <= to`, most recent first
  async fn list_range(
    &self,
    user_id: &str,
    from: NaiveDate,
    to: NaiveDate,
  ) -> Result<Vec<RecoveryMetrics>, RecoveryError>;
}

pub struct SqliteRecoveryRepository {
  pool: DbPool,
}

impl SqliteRecoveryRepository {
  pub fn new(pool: DbPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl RecoveryRepository for SqliteRecoveryRepository {
  async fn save(&self, record: &RecoveryMetrics) -> Result<(), RecoveryError> {
    sqlx::query(
      r#"
      INSERT INTO recovery_metrics (
        user_id, date, sleep_hours, sleep_quality, fatigue_level,
        soreness_level, stress_level, recovery_score, readiness_status
      )
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
      ON CONFLICT(user_id, date) DO UPDATE SET
        sleep_hours = excluded.sleep_hours,
        sleep_quality = excluded.sleep_quality,
        fatigue_level = excluded.fatigue_level,
        soreness_level = excluded.soreness_level,
        stress_level = excluded.stress_level,
        recovery_score = excluded.recovery_score,
        readiness_status = excluded.readiness_status
      "#,
    )
    .bind(&record.user_id)
    .bind(record.date)
    .bind(record.sleep_hours)
    .bind(record.sleep_quality)
    .bind(record.fatigue_level)
    .bind(record.soreness_level)
    .bind(record.stress_level)
    .bind(record.recovery_score)
    .bind(record.readiness_status)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn find_by_date(
    &self,
    user_id: &str,
    date: NaiveDate,
  ) -> Result<Option<RecoveryMetrics>, RecoveryError> {
    let record = sqlx::query_as::<_, RecoveryMetrics>(
      r#"
      SELECT
        user_id, date, sleep_hours, sleep_quality, fatigue_level,
        soreness_level, stress_level, recovery_score, readiness_status
      FROM recovery_metrics
      WHERE user_id = ?1 AND date = ?2
      "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_optional(&self.pool)
    .await?;

    Ok(record)
  }

  async fn list_range(
    &self,
    user_id: &str,
    from: NaiveDate,
    to: NaiveDate,
  ) -> Result<Vec<RecoveryMetrics>, RecoveryError> {
    let records = sqlx::query_as::<_, RecoveryMetrics>(
      r#"
      SELECT
        user_id, date, sleep_hours, sleep_quality, fatigue_level,
        soreness_level, stress_level, recovery_score, readiness_status
      FROM recovery_metrics
      WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
      ORDER BY date DESC
      "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(&self.pool)
    .await?;

    Ok(records)
  }
}
