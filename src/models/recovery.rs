use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::analysis::{ReadinessStatus, RecoveryAnalysis};
use crate::error::RecoveryError;

/// Daily self-reported recovery signals, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryInput {
  /// Hours slept, 0-24
  pub sleep_hours: f64,
  /// Subjective sleep quality, 0-10
  pub sleep_quality: f64,
  /// 0-10, higher = more fatigued
  pub fatigue_level: f64,
  /// 0-10, higher = more sore
  pub soreness_level: f64,
  /// 0-10, higher = more stressed
  pub stress_level: f64,
}

impl RecoveryInput {
  pub const MAX_SLEEP_HOURS: f64 = 24.0;
  pub const MAX_LEVEL: f64 = 10.0;

  /// Reject any value outside its domain. NaN and infinities are rejected too.
  pub fn validate(&self) -> Result<(), RecoveryError> {
    check_range("sleep_hours", self.sleep_hours, Self::MAX_SLEEP_HOURS)?;
    check_range("sleep_quality", self.sleep_quality, Self::MAX_LEVEL)?;
    check_range("fatigue_level", self.fatigue_level, Self::MAX_LEVEL)?;
    check_range("soreness_level", self.soreness_level, Self::MAX_LEVEL)?;
    check_range("stress_level", self.stress_level, Self::MAX_LEVEL)?;
    Ok(())
  }
}

fn check_range(field: &'static str, value: f64, max: f64) -> Result<(), RecoveryError> {
  if (0.0..=max).contains(&value) {
    Ok(())
  } else {
    Err(RecoveryError::InvalidInput {
      field,
      value,
      min: 0.0,
      max,
    })
  }
}

/// Persisted daily record, unique per (user_id, date)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecoveryMetrics {
  pub user_id: String,
  pub date: NaiveDate,
  pub sleep_hours: f64,
  pub sleep_quality: f64,
  pub fatigue_level: f64,
  pub soreness_level: f64,
  pub stress_level: f64,
  pub recovery_score: i64,
  pub readiness_status: ReadinessStatus,
}

impl RecoveryMetrics {
  pub fn from_analysis(
    user_id: &str,
    date: NaiveDate,
    input: &RecoveryInput,
    analysis: &RecoveryAnalysis,
  ) -> Self {
    Self {
      user_id: user_id.to_string(),
      date,
      sleep_hours: input.sleep_hours,
      sleep_quality: input.sleep_quality,
      fatigue_level: input.fatigue_level,
      soreness_level: input.soreness_level,
      stress_level: input.stress_level,
      recovery_score: i64::from(analysis.score),
      readiness_status: analysis.status,
    }
  }

  /// The inputs this record was scored from
  pub fn input(&self) -> RecoveryInput {
    RecoveryInput {
      sleep_hours: self.sleep_hours,
      sleep_quality: self.sleep_quality,
      fatigue_level: self.fatigue_level,
      soreness_level: self.soreness_level,
      stress_level: self.stress_level,
    }
  }
}
