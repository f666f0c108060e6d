use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::{RecoveryConfig, TrendSettings};
use crate::engine::RecoveryEngine;
use crate::error::RecoveryError;
use crate::repository::SqliteRecoveryRepository;

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
  pub trend: TrendSettings,
}

impl AppState {
  /// Engine over this state's pool. The pool is reference-counted, so this is cheap.
  pub fn engine(&self) -> RecoveryEngine<SqliteRecoveryRepository> {
    RecoveryEngine::with_settings(
      SqliteRecoveryRepository::new(self.db.clone()),
      self.trend.clone(),
    )
  }
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(config: &RecoveryConfig) -> Result<DbPool, RecoveryError> {
  tracing::info!(
    max_connections = config.max_connections,
    "Initializing recovery database"
  );

  let pool = SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .connect(&config.database_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Recovery database initialized");

  Ok(pool)
}
