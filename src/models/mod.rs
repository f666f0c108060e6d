pub mod recovery;
pub mod analysis;

pub use recovery::{RecoveryInput, RecoveryMetrics};
pub use analysis::{
  FactorScore, ReadinessStatus, RecoveryAnalysis, RecoveryFactor, RecoveryFactors,
  RecoverySummary, TrendDirection, WorkoutIntensity,
};
