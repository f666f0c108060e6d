//! Error types for scoring, persistence and configuration

use crate::models::RecoveryAnalysis;

#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
  #[error("Invalid input: {field} = {value} (expected {min} to {max})")]
  InvalidInput {
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
  },

  #[error("Invalid user id: {0:?}")]
  InvalidUserId(String),

  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  /// The score was computed but could not be stored.
  #[error("Failed to persist recovery score {}: {source}", .analysis.score)]
  Persistence {
    analysis: Box<RecoveryAnalysis>,
    #[source]
    source: Box<RecoveryError>,
  },
}

impl RecoveryError {
  /// The computed analysis, if this error happened after scoring succeeded
  pub fn analysis(&self) -> Option<&RecoveryAnalysis> {
    match self {
      RecoveryError::Persistence { analysis, .. } => Some(analysis),
      _ => None,
    }
  }

  /// Recover the computed analysis from a persistence failure, or give the error back
  pub fn into_analysis(self) -> Result<RecoveryAnalysis, RecoveryError> {
    match self {
      RecoveryError::Persistence { analysis, .. } => Ok(*analysis),
      other => Err(other),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_input_message_names_field_and_range() {
    let err = RecoveryError::InvalidInput {
      field: "fatigue_level",
      value: 15.0,
      min: 0.0,
      max: 10.0,
    };
    assert_eq!(
      err.to_string(),
      "Invalid input: fatigue_level = 15 (expected 0 to 10)"
    );
  }

  #[test]
  fn test_into_analysis_passes_other_errors_through() {
    let err = RecoveryError::MissingConfig("DATABASE_URL".into());
    let result = err.into_analysis();
    assert!(matches!(result, Err(RecoveryError::MissingConfig(_))));
  }
}
