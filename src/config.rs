//! Environment-driven configuration
//!
//! `.env` is loaded by `crate::initialize` before `RecoveryConfig::from_env` runs.

use std::env::{self, VarError};
use std::str::FromStr;

use crate::error::RecoveryError;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TREND_DAYS: u32 = 7;
const DEFAULT_NEUTRAL_SCORE: f64 = 70.0;
const DEFAULT_DELOAD_SAMPLE: usize = 5;
const DEFAULT_DELOAD_THRESHOLD: f64 = 60.0;

/// Trend window and deload thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSettings {
  /// Calendar days in the trend window, including today
  pub window_days: u32,
  /// Average reported when a user has no history in the window
  pub neutral_score: f64,
  /// Most recent records averaged for the deload check
  pub deload_sample_size: usize,
  /// Deload when the sample mean is strictly below this
  pub deload_threshold: f64,
}

impl Default for TrendSettings {
  fn default() -> Self {
    Self {
      window_days: DEFAULT_TREND_DAYS,
      neutral_score: DEFAULT_NEUTRAL_SCORE,
      deload_sample_size: DEFAULT_DELOAD_SAMPLE,
      deload_threshold: DEFAULT_DELOAD_THRESHOLD,
    }
  }
}

#[derive(Debug, Clone)]
pub struct RecoveryConfig {
  pub database_url: String,
  pub max_connections: u32,
  pub trend: TrendSettings,
}

impl RecoveryConfig {
  pub fn from_env() -> Result<Self, RecoveryError> {
    let database_url = env::var("DATABASE_URL")
      .map_err(|_| RecoveryError::MissingConfig("DATABASE_URL".into()))?;

    let trend = TrendSettings {
      window_days: parse_var("RECOVERY_TREND_DAYS", DEFAULT_TREND_DAYS)?,
      neutral_score: parse_var("RECOVERY_NEUTRAL_SCORE", DEFAULT_NEUTRAL_SCORE)?,
      deload_sample_size: parse_var("RECOVERY_DELOAD_SAMPLE", DEFAULT_DELOAD_SAMPLE)?,
      deload_threshold: parse_var("RECOVERY_DELOAD_THRESHOLD", DEFAULT_DELOAD_THRESHOLD)?,
    };

    if trend.window_days == 0 {
      return Err(RecoveryError::InvalidConfig(
        "RECOVERY_TREND_DAYS must be at least 1".into(),
      ));
    }
    if trend.deload_sample_size == 0 {
      return Err(RecoveryError::InvalidConfig(
        "RECOVERY_DELOAD_SAMPLE must be at least 1".into(),
      ));
    }
    check_score("RECOVERY_NEUTRAL_SCORE", trend.neutral_score)?;
    check_score("RECOVERY_DELOAD_THRESHOLD", trend.deload_threshold)?;

    Ok(Self {
      database_url,
      max_connections: parse_var("RECOVERY_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
      trend,
    })
  }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, RecoveryError> {
  match env::var(name) {
    Ok(raw) => raw
      .trim()
      .parse()
      .map_err(|_| RecoveryError::InvalidConfig(format!("{} = {:?}", name, raw))),
    Err(VarError::NotPresent) => Ok(default),
    Err(VarError::NotUnicode(raw)) => Err(RecoveryError::InvalidConfig(format!(
      "{} is not valid unicode: {:?}",
      name, raw
    ))),
  }
}

/// Score-scale settings must be finite and within 0-100
fn check_score(name: &str, value: f64) -> Result<(), RecoveryError> {
  if !(0.0..=100.0).contains(&value) {
    return Err(RecoveryError::InvalidConfig(format!(
      "{} must be between 0 and 100, got {}",
      name, value
    )));
  }
  Ok(())
}
