//! Rolling readiness trend and deload detection
//!
//! Pure functions over records already fetched from the repository. Record
//! slices are expected most recent first, as `RecoveryRepository::list_range`
//! returns them.

use chrono::{Duration, NaiveDate};

use crate::models::{RecoveryMetrics, TrendDirection};

/// Points either side of the window average treated as "stable"
const DIRECTION_BAND: f64 = 5.0;

/// First day of a `days`-long window ending on (and including) `today`.
/// A zero-day window is treated as one day; a window reaching past the
/// earliest representable date starts there.
pub fn window_start(today: NaiveDate, days: u32) -> NaiveDate {
  today
    .checked_sub_signed(Duration::days(i64::from(days.max(1)) - 1))
    .unwrap_or(NaiveDate::MIN)
}

/// Mean recovery score, or `neutral` when there is no history
pub fn average_score(records: &[RecoveryMetrics], neutral: f64) -> f64 {
  if records.is_empty() {
    return neutral;
  }
  let sum: i64 = records.iter().map(|r| r.recovery_score).sum();
  sum as f64 / records.len() as f64
}

/// Deload when at least `sample_size` records exist and the mean of the
/// `sample_size` most recent is below `threshold`. Sparse data never triggers.
pub fn deload_recommended(records: &[RecoveryMetrics], sample_size: usize, threshold: f64) -> bool {
  if sample_size == 0 || records.len() < sample_size {
    return false;
  }
  average_score(&records[..sample_size], threshold) < threshold
}

/// Compare the latest score against the window average
pub fn direction(records: &[RecoveryMetrics]) -> Option<TrendDirection> {
  // A single record has nothing to compare against
  if records.len() < 2 {
    return None;
  }
  let latest = records[0].recovery_score as f64;
  let avg = average_score(records, latest);
  let delta = latest - avg;

  if delta > DIRECTION_BAND {
    Some(TrendDirection::Improving)
  } else if delta < -DIRECTION_BAND {
    Some(TrendDirection::Declining)
  } else {
    Some(TrendDirection::Stable)
  }
}
