//! Recovery readiness engine
//!
//! Scores a day's input, persists it through the injected repository and
//! answers trend questions from persisted history. Scoring itself is pure
//! (`crate::analysis`); the repository is the only source of history.
//!
//! Persistence is compute-then-persist: when the write fails the caller gets
//! `RecoveryError::Persistence`, which still carries the computed analysis.

use chrono::{NaiveDate, Utc};

use crate::analysis;
use crate::config::TrendSettings;
use crate::error::RecoveryError;
use crate::models::{RecoveryAnalysis, RecoveryInput, RecoveryMetrics, RecoverySummary};
use crate::repository::RecoveryRepository;
use crate::trend;

/// Today's calendar date (UTC)
pub fn today() -> NaiveDate {
  Utc::now().date_naive()
}

pub struct RecoveryEngine<R> {
  repo: R,
  settings: TrendSettings,
}

impl<R: RecoveryRepository> RecoveryEngine<R> {
  pub fn new(repo: R) -> Self {
    Self::with_settings(repo, TrendSettings::default())
  }

  pub fn with_settings(repo: R, settings: TrendSettings) -> Self {
    Self { repo, settings }
  }

  pub fn settings(&self) -> &TrendSettings {
    &self.settings
  }

  /// Score today's input and store it
  pub async fn calculate_recovery_score(
    &self,
    user_id: &str,
    input: &RecoveryInput,
  ) -> Result<RecoveryAnalysis, RecoveryError> {
    self.calculate_recovery_score_on(user_id, today(), input).await
  }

  /// Score input for a specific calendar day and store it, replacing any
  /// earlier record for that day
  pub async fn calculate_recovery_score_on(
    &self,
    user_id: &str,
    date: NaiveDate,
    input: &RecoveryInput,
  ) -> Result<RecoveryAnalysis, RecoveryError> {
    check_user_id(user_id)?;
    let analysis = analysis::analyze(input)?;

    let record = RecoveryMetrics::from_analysis(user_id, date, input, &analysis);
    if let Err(err) = self.repo.save(&record).await {
      tracing::warn!(
        user_id,
        %date,
        score = analysis.score,
        error = %err,
        "Failed to persist recovery score"
      );
      return Err(RecoveryError::Persistence {
        analysis: Box::new(analysis),
        source: Box::new(err),
      });
    }

    tracing::info!(
      user_id,
      %date,
      score = analysis.score,
      status = %analysis.status,
      "Recovery score recorded"
    );

    Ok(analysis)
  }

  /// Stored record for one day, if any
  pub async fn get_recovery_for_date(
    &self,
    user_id: &str,
    date: NaiveDate,
  ) -> Result<Option<RecoveryMetrics>, RecoveryError> {
    check_user_id(user_id)?;
    self.repo.find_by_date(user_id, date).await
  }

  /// Records for the trend window (last 7 days by default), most recent first
  pub async fn get_recovery_trend(&self, user_id: &str) -> Result<Vec<RecoveryMetrics>, RecoveryError> {
    self.get_recovery_trend_as_of(user_id, today()).await
  }

  pub async fn get_recovery_trend_as_of(
    &self,
    user_id: &str,
    today: NaiveDate,
  ) -> Result<Vec<RecoveryMetrics>, RecoveryError> {
    self.load_window(user_id, today, self.settings.window_days).await
  }

  /// Mean score over the last `days` days (trend window when `None`);
  /// the neutral score when there is no history
  pub async fn get_average_recovery_score(
    &self,
    user_id: &str,
    days: Option<u32>,
  ) -> Result<f64, RecoveryError> {
    self.get_average_recovery_score_as_of(user_id, days, today()).await
  }

  pub async fn get_average_recovery_score_as_of(
    &self,
    user_id: &str,
    days: Option<u32>,
    today: NaiveDate,
  ) -> Result<f64, RecoveryError> {
    let days = days.unwrap_or(self.settings.window_days);
    let records = self.load_window(user_id, today, days).await?;
    Ok(trend::average_score(&records, self.settings.neutral_score))
  }

  /// Whether the most recent scores in the trend window call for a deload
  pub async fn should_deload(&self, user_id: &str) -> Result<bool, RecoveryError> {
    self.should_deload_as_of(user_id, today()).await
  }

  pub async fn should_deload_as_of(
    &self,
    user_id: &str,
    today: NaiveDate,
  ) -> Result<bool, RecoveryError> {
    let records = self.get_recovery_trend_as_of(user_id, today).await?;
    let deload = trend::deload_recommended(
      &records,
      self.settings.deload_sample_size,
      self.settings.deload_threshold,
    );
    tracing::debug!(user_id, records = records.len(), deload, "Deload check");
    Ok(deload)
  }

  /// Trend window rolled up in a single read
  pub async fn get_recovery_summary(&self, user_id: &str) -> Result<RecoverySummary, RecoveryError> {
    self.get_recovery_summary_as_of(user_id, today()).await
  }

  pub async fn get_recovery_summary_as_of(
    &self,
    user_id: &str,
    today: NaiveDate,
  ) -> Result<RecoverySummary, RecoveryError> {
    let records = self.get_recovery_trend_as_of(user_id, today).await?;

    Ok(RecoverySummary {
      user_id: user_id.to_string(),
      as_of: today,
      days_logged: records.len(),
      average_score: trend::average_score(&records, self.settings.neutral_score),
      deload_recommended: trend::deload_recommended(
        &records,
        self.settings.deload_sample_size,
        self.settings.deload_threshold,
      ),
      direction: trend::direction(&records),
      latest: records.into_iter().next(),
    })
  }

  async fn load_window(
    &self,
    user_id: &str,
    today: NaiveDate,
    days: u32,
  ) -> Result<Vec<RecoveryMetrics>, RecoveryError> {
    check_user_id(user_id)?;
    let from = trend::window_start(today, days);
    let records = self.repo.list_range(user_id, from, today).await?;
    tracing::debug!(user_id, %from, %today, records = records.len(), "Loaded recovery window");
    Ok(records)
  }
}

fn check_user_id(user_id: &str) -> Result<(), RecoveryError> {
  if user_id.trim().is_empty() {
    return Err(RecoveryError::InvalidUserId(user_id.to_string()));
  }
  Ok(())
}
