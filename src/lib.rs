//! Recovery readiness scoring
//!
//! Turns a daily check-in (sleep, fatigue, soreness, stress) into a 0-100
//! readiness score, a readiness status, a workout-intensity recommendation and,
//! from stored history, a 7-day trend with deload detection.

pub mod analysis;
pub mod commands;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod recommendation;
pub mod repository;
pub mod trend;

#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

pub use analysis::analyze;
pub use config::{RecoveryConfig, TrendSettings};
pub use db::AppState;
pub use engine::RecoveryEngine;
pub use error::RecoveryError;
pub use models::{
  FactorScore, ReadinessStatus, RecoveryAnalysis, RecoveryFactor, RecoveryFactors,
  RecoveryInput, RecoveryMetrics, RecoverySummary, TrendDirection, WorkoutIntensity,
};
pub use repository::{RecoveryRepository, SqliteRecoveryRepository};

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load `.env`, set up logging, open the database and run migrations
pub async fn initialize() -> Result<Arc<AppState>, RecoveryError> {
  dotenvy::dotenv().ok();
  init_tracing();

  let config = RecoveryConfig::from_env()?;
  let pool = db::initialize_db(&config).await?;
  tracing::info!("Database ready");

  Ok(Arc::new(AppState {
    db: pool,
    trend: config.trend,
  }))
}
