use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recovery::RecoveryMetrics;

// ---------------------------------------------------------------------------
/// Readiness Status: five ordered bands, most ready first
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ReadinessStatus {
  /// 85-100
  Optimal,
  /// 70-84
  Good,
  /// 50-69
  Moderate,
  /// 30-49
  Low,
  /// 0-29
  RestNeeded,
}

impl ReadinessStatus {
  /// Classify an aggregate score. Each band includes its lower bound.
  pub fn from_score(score: u8) -> Self {
    match score {
      85..=u8::MAX => ReadinessStatus::Optimal,
      70..=84 => ReadinessStatus::Good,
      50..=69 => ReadinessStatus::Moderate,
      30..=49 => ReadinessStatus::Low,
      _ => ReadinessStatus::RestNeeded,
    }
  }

  pub fn workout_intensity(&self) -> WorkoutIntensity {
    match self {
      ReadinessStatus::Optimal => WorkoutIntensity::High,
      ReadinessStatus::Good => WorkoutIntensity::Moderate,
      ReadinessStatus::Moderate => WorkoutIntensity::Light,
      ReadinessStatus::Low | ReadinessStatus::RestNeeded => WorkoutIntensity::Rest,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ReadinessStatus::Optimal => "optimal",
      ReadinessStatus::Good => "good",
      ReadinessStatus::Moderate => "moderate",
      ReadinessStatus::Low => "low",
      ReadinessStatus::RestNeeded => "rest_needed",
    }
  }
}

impl std::fmt::Display for ReadinessStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for ReadinessStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "optimal" => Ok(Self::Optimal),
      "good" => Ok(Self::Good),
      "moderate" => Ok(Self::Moderate),
      "low" => Ok(Self::Low),
      "rest_needed" => Ok(Self::RestNeeded),
      _ => Err(format!("Unknown readiness status: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
  High,
  Moderate,
  Light,
  Rest,
}

impl WorkoutIntensity {
  pub fn as_str(&self) -> &'static str {
    match self {
      WorkoutIntensity::High => "high",
      WorkoutIntensity::Moderate => "moderate",
      WorkoutIntensity::Light => "light",
      WorkoutIntensity::Rest => "rest",
    }
  }
}

impl std::fmt::Display for WorkoutIntensity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
/// Factor Scores
// ---------------------------------------------------------------------------

/// The four scored dimensions. Declaration order is the weakest-factor tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryFactor {
  Sleep,
  Fatigue,
  Soreness,
  Stress,
}

impl RecoveryFactor {
  pub const ALL: [RecoveryFactor; 4] = [
    RecoveryFactor::Sleep,
    RecoveryFactor::Fatigue,
    RecoveryFactor::Soreness,
    RecoveryFactor::Stress,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      RecoveryFactor::Sleep => "sleep",
      RecoveryFactor::Fatigue => "fatigue",
      RecoveryFactor::Soreness => "soreness",
      RecoveryFactor::Stress => "stress",
    }
  }
}

impl std::fmt::Display for RecoveryFactor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
  /// 0-100
  pub score: u8,
  pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryFactors {
  pub sleep: FactorScore,
  pub fatigue: FactorScore,
  pub soreness: FactorScore,
  pub stress: FactorScore,
}

impl RecoveryFactors {
  pub fn get(&self, factor: RecoveryFactor) -> &FactorScore {
    match factor {
      RecoveryFactor::Sleep => &self.sleep,
      RecoveryFactor::Fatigue => &self.fatigue,
      RecoveryFactor::Soreness => &self.soreness,
      RecoveryFactor::Stress => &self.stress,
    }
  }

  /// Lowest-scoring factor. Ties go to the earliest in `RecoveryFactor::ALL`.
  pub fn weakest(&self) -> (RecoveryFactor, &FactorScore) {
    let mut weakest = (RecoveryFactor::Sleep, &self.sleep);
    for factor in RecoveryFactor::ALL {
      let score = self.get(factor);
      if score.score < weakest.1.score {
        weakest = (factor, score);
      }
    }
    weakest
  }
}

// ---------------------------------------------------------------------------
/// Engine Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryAnalysis {
  /// Weighted aggregate, 0-100
  pub score: u8,
  pub status: ReadinessStatus,
  pub workout_intensity: WorkoutIntensity,
  pub recommendation: String,
  pub factors: RecoveryFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
  Improving,
  Stable,
  Declining,
}

/// Trend window rolled up for a dashboard read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverySummary {
  pub user_id: String,
  pub as_of: NaiveDate,
  pub days_logged: usize,
  pub average_score: f64,
  pub deload_recommended: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub direction: Option<TrendDirection>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub latest: Option<RecoveryMetrics>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn factor(score: u8, impact: &str) -> FactorScore {
    FactorScore {
      score,
      impact: impact.to_string(),
    }
  }

  #[test]
  fn test_classification_boundaries() {
    assert_eq!(ReadinessStatus::from_score(100), ReadinessStatus::Optimal);
    assert_eq!(ReadinessStatus::from_score(85), ReadinessStatus::Optimal);
    assert_eq!(ReadinessStatus::from_score(84), ReadinessStatus::Good);
    assert_eq!(ReadinessStatus::from_score(70), ReadinessStatus::Good);
    assert_eq!(ReadinessStatus::from_score(69), ReadinessStatus::Moderate);
    assert_eq!(ReadinessStatus::from_score(50), ReadinessStatus::Moderate);
    assert_eq!(ReadinessStatus::from_score(49), ReadinessStatus::Low);
    assert_eq!(ReadinessStatus::from_score(30), ReadinessStatus::Low);
    assert_eq!(ReadinessStatus::from_score(29), ReadinessStatus::RestNeeded);
    assert_eq!(ReadinessStatus::from_score(0), ReadinessStatus::RestNeeded);
  }

  #[test]
  fn test_intensity_mapping() {
    assert_eq!(ReadinessStatus::Optimal.workout_intensity(), WorkoutIntensity::High);
    assert_eq!(ReadinessStatus::Good.workout_intensity(), WorkoutIntensity::Moderate);
    assert_eq!(ReadinessStatus::Moderate.workout_intensity(), WorkoutIntensity::Light);
    assert_eq!(ReadinessStatus::Low.workout_intensity(), WorkoutIntensity::Rest);
    assert_eq!(ReadinessStatus::RestNeeded.workout_intensity(), WorkoutIntensity::Rest);
  }

  #[test]
  fn test_status_string_roundtrip() {
    for status in [
      ReadinessStatus::Optimal,
      ReadinessStatus::Good,
      ReadinessStatus::Moderate,
      ReadinessStatus::Low,
      ReadinessStatus::RestNeeded,
    ] {
      let parsed: ReadinessStatus = status.to_string().parse().unwrap();
      assert_eq!(parsed, status);
    }
    assert!("exhausted".parse::<ReadinessStatus>().is_err());
  }

  #[test]
  fn test_status_serializes_snake_case() {
    let json = serde_json::to_string(&ReadinessStatus::RestNeeded).unwrap();
    assert_eq!(json, "\"rest_needed\"");
    let json = serde_json::to_string(&WorkoutIntensity::High).unwrap();
    assert_eq!(json, "\"high\"");
  }

  #[test]
  fn test_weakest_picks_minimum() {
    let factors = RecoveryFactors {
      sleep: factor(20, "sleep"),
      fatigue: factor(10, "fatigue"),
      soreness: factor(20, "soreness"),
      stress: factor(20, "stress"),
    };
    let (weakest, score) = factors.weakest();
    assert_eq!(weakest, RecoveryFactor::Fatigue);
    assert_eq!(score.score, 10);
  }

  #[test]
  fn test_weakest_tie_break_follows_factor_order() {
    let factors = RecoveryFactors {
      sleep: factor(60, "sleep"),
      fatigue: factor(40, "fatigue"),
      soreness: factor(40, "soreness"),
      stress: factor(40, "stress"),
    };
    assert_eq!(factors.weakest().0, RecoveryFactor::Fatigue);

    let all_equal = RecoveryFactors {
      sleep: factor(50, "sleep"),
      fatigue: factor(50, "fatigue"),
      soreness: factor(50, "soreness"),
      stress: factor(50, "stress"),
    };
    assert_eq!(all_equal.weakest().0, RecoveryFactor::Sleep);

    let late_tie = RecoveryFactors {
      sleep: factor(90, "sleep"),
      fatigue: factor(80, "fatigue"),
      soreness: factor(30, "soreness"),
      stress: factor(30, "stress"),
    };
    assert_eq!(late_tie.weakest().0, RecoveryFactor::Soreness);
  }
}
