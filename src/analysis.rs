//! Deterministic scoring layer for daily recovery signals
//!
//! Each input dimension is scored 0-100 on its own, then the four sub-scores
//! are combined with fixed weights into the readiness score.

use crate::error::RecoveryError;
use crate::models::{
  FactorScore, ReadinessStatus, RecoveryAnalysis, RecoveryFactors, RecoveryInput,
};
use crate::recommendation;

/// ---------------------------------------------------------------------------
/// Aggregate Weights (percent, sum to 100)
/// ---------------------------------------------------------------------------

pub const SLEEP_WEIGHT_PCT: u32 = 35;
pub const FATIGUE_WEIGHT_PCT: u32 = 30;
pub const SORENESS_WEIGHT_PCT: u32 = 20;
pub const STRESS_WEIGHT_PCT: u32 = 15;

/// ---------------------------------------------------------------------------
/// Tier 1: Component Scorers
/// ---------------------------------------------------------------------------

/// Points for hours slept, out of 50
fn sleep_hours_points(hours: f64) -> u32 {
  if (7.0..=9.0).contains(&hours) {
    50
  } else if (6.0..7.0).contains(&hours) || (hours > 9.0 && hours <= 10.0) {
    40
  } else if (5.0..6.0).contains(&hours) || hours > 10.0 {
    25
  } else {
    10
  }
}

/// Sleep: up to 50 points for duration plus `quality * 5`, capped at 100
pub fn score_sleep(hours: f64, quality: f64) -> FactorScore {
  let total = (f64::from(sleep_hours_points(hours)) + quality * 5.0).min(100.0);
  let score = to_score(total);

  let impact = match score {
    85..=u8::MAX => "Excellent sleep - fully restored",
    70..=84 => "Good sleep - well rested",
    50..=69 => "Fair sleep - recovery may be incomplete",
    _ => "Poor sleep - recovery significantly impaired",
  };

  FactorScore {
    score,
    impact: impact.to_string(),
  }
}

/// Shared inverse-linear transform: level 0 -> 100, level 10 -> 0
fn inverse_level_score(level: f64) -> u8 {
  to_score((10.0 - level) * 10.0)
}

/// Pick the impact note for a 0-10 level: <=3, <=5, <=7, above 7
fn level_impact<'a>(level: f64, notes: [&'a str; 4]) -> &'a str {
  if level <= 3.0 {
    notes[0]
  } else if level <= 5.0 {
    notes[1]
  } else if level <= 7.0 {
    notes[2]
  } else {
    notes[3]
  }
}

pub fn score_fatigue(level: f64) -> FactorScore {
  let impact = level_impact(
    level,
    [
      "Minimal fatigue - ready to train",
      "Moderate fatigue - manageable with a sensible load",
      "High fatigue - train with caution",
      "Severe fatigue - prioritize rest",
    ],
  );
  FactorScore {
    score: inverse_level_score(level),
    impact: impact.to_string(),
  }
}

pub fn score_soreness(level: f64) -> FactorScore {
  let impact = level_impact(
    level,
    [
      "Minimal soreness - muscles ready",
      "Moderate soreness - manageable, warm up thoroughly",
      "High soreness - avoid loading sore muscle groups",
      "Severe soreness - prioritize rest and mobility",
    ],
  );
  FactorScore {
    score: inverse_level_score(level),
    impact: impact.to_string(),
  }
}

pub fn score_stress(level: f64) -> FactorScore {
  let impact = level_impact(
    level,
    [
      "Low stress - ready to perform",
      "Moderate stress - manageable",
      "High stress - keep training load in check",
      "Severe stress - prioritize rest and recovery",
    ],
  );
  FactorScore {
    score: inverse_level_score(level),
    impact: impact.to_string(),
  }
}

/// Round a computed score into 0-100
fn to_score(value: f64) -> u8 {
  value.round().clamp(0.0, 100.0) as u8
}

/// ---------------------------------------------------------------------------
/// Tier 2: Aggregate + Classification
/// ---------------------------------------------------------------------------

/// Weighted sum of the four sub-scores, rounded half up.
///
/// Evaluated in integer percent so 83.5 always rounds to 84, regardless of how
/// 0.35 is represented in binary.
pub fn aggregate(factors: &RecoveryFactors) -> u8 {
  let weighted = u32::from(factors.sleep.score) * SLEEP_WEIGHT_PCT
    + u32::from(factors.fatigue.score) * FATIGUE_WEIGHT_PCT
    + u32::from(factors.soreness.score) * SORENESS_WEIGHT_PCT
    + u32::from(factors.stress.score) * STRESS_WEIGHT_PCT;

  // Sub-scores are <= 100 and weights sum to 100, so this is <= 100
  ((weighted + 50) / 100) as u8
}

pub fn score_factors(input: &RecoveryInput) -> RecoveryFactors {
  RecoveryFactors {
    sleep: score_sleep(input.sleep_hours, input.sleep_quality),
    fatigue: score_fatigue(input.fatigue_level),
    soreness: score_soreness(input.soreness_level),
    stress: score_stress(input.stress_level),
  }
}

/// Validate and score one day of input. Pure; nothing is persisted.
pub fn analyze(input: &RecoveryInput) -> Result<RecoveryAnalysis, RecoveryError> {
  input.validate()?;

  let factors = score_factors(input);
  let score = aggregate(&factors);
  let status = ReadinessStatus::from_score(score);
  let recommendation = recommendation::build_recommendation(score, status, &factors);

  Ok(RecoveryAnalysis {
    score,
    status,
    workout_intensity: status.workout_intensity(),
    recommendation,
    factors,
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
