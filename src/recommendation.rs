//! Natural-language recommendation for a scored day

use crate::models::{ReadinessStatus, RecoveryFactors};

/// Compose the recommendation text.
///
/// Always opens with `Recovery Score: {score}/100 ({status}).` For moderate and
/// below, the weakest factor is named along with its impact note.
pub fn build_recommendation(
  score: u8,
  status: ReadinessStatus,
  factors: &RecoveryFactors,
) -> String {
  let header = format!("Recovery Score: {}/100 ({}).", score, status);
  let (weakest, weakest_score) = factors.weakest();

  match status {
    ReadinessStatus::Optimal => format!(
      "{} You're fully recovered. Go for a high-intensity session or a key workout today.",
      header
    ),
    ReadinessStatus::Good => format!(
      "{} You're well recovered. A moderate-intensity session fits today.",
      header
    ),
    ReadinessStatus::Moderate => format!(
      "{} Keep today light - easy aerobic work or technique. Your {} is the main limiter: {}.",
      header, weakest, weakest_score.impact
    ),
    ReadinessStatus::Low => format!(
      "{} Take a rest or active recovery day. Focus on your {}: {}.",
      header, weakest, weakest_score.impact
    ),
    ReadinessStatus::RestNeeded => format!(
      "{} Your body needs rest today - skip training. Address your {} first: {}.",
      header, weakest, weakest_score.impact
    ),
  }
}
