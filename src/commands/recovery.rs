//! Recovery readiness commands

use chrono::NaiveDate;

use crate::db::AppState;
use crate::error::RecoveryError;
use crate::models::{RecoveryAnalysis, RecoveryInput, RecoveryMetrics, RecoverySummary};

/// Score today's check-in.
///
/// A failed write is logged and the computed analysis is still returned.
pub async fn calculate_recovery_score(
  state: &AppState,
  user_id: String,
  input: RecoveryInput,
) -> Result<RecoveryAnalysis, String> {
  match state.engine().calculate_recovery_score(&user_id, &input).await {
    Ok(analysis) => Ok(analysis),
    Err(err @ RecoveryError::Persistence { .. }) => {
      tracing::warn!(user_id = %user_id, "Returning unsaved recovery analysis: {}", err);
      err.into_analysis().map_err(|e| e.to_string())
    }
    Err(err) => Err(format!("Failed to calculate recovery score: {}", err)),
  }
}

/// Stored check-in for one day
pub async fn get_recovery_for_date(
  state: &AppState,
  user_id: String,
  date: NaiveDate,
) -> Result<Option<RecoveryMetrics>, String> {
  state
    .engine()
    .get_recovery_for_date(&user_id, date)
    .await
    .map_err(|e| format!("Failed to fetch recovery record: {}", e))
}

/// Last 7 days, most recent first
pub async fn get_recovery_trend(
  state: &AppState,
  user_id: String,
) -> Result<Vec<RecoveryMetrics>, String> {
  state
    .engine()
    .get_recovery_trend(&user_id)
    .await
    .map_err(|e| format!("Failed to fetch recovery trend: {}", e))
}

pub async fn get_average_recovery_score(
  state: &AppState,
  user_id: String,
  days: Option<u32>,
) -> Result<f64, String> {
  state
    .engine()
    .get_average_recovery_score(&user_id, days)
    .await
    .map_err(|e| format!("Failed to average recovery scores: {}", e))
}

pub async fn should_deload(state: &AppState, user_id: String) -> Result<bool, String> {
  state
    .engine()
    .should_deload(&user_id)
    .await
    .map_err(|e| format!("Failed to check deload: {}", e))
}

pub async fn get_recovery_summary(
  state: &AppState,
  user_id: String,
) -> Result<RecoverySummary, String> {
  state
    .engine()
    .get_recovery_summary(&user_id)
    .await
    .map_err(|e| format!("Failed to build recovery summary: {}", e))
}
