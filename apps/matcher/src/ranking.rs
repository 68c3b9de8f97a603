//! Ranks many candidates against one job by overall match.

use serde::Serialize;

use crate::models::profile::{CandidateProfile, JobRequirements};
use crate::models::report::MatchReport;
use crate::scoring::composer::MatchScorer;

/// Qualitative band of an overall match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    /// excellent ≥ 90, good ≥ 80, fair ≥ 65, otherwise poor
    pub fn from_score(overall_match: u32) -> Self {
        match overall_match {
            s if s >= 90 => MatchTier::Excellent,
            s if s >= 80 => MatchTier::Good,
            s if s >= 65 => MatchTier::Fair,
            _ => MatchTier::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize, // 1-based
    pub tier: MatchTier,
    #[serde(flatten)]
    pub report: MatchReport,
}

/// Orders by `overall_match` descending. Ties keep input order.
pub fn rank_reports(mut reports: Vec<MatchReport>) -> Vec<RankedCandidate> {
    reports.sort_by(|a, b| b.overall_match.cmp(&a.overall_match));
    reports
        .into_iter()
        .enumerate()
        .map(|(i, report)| RankedCandidate {
            rank: i + 1,
            tier: MatchTier::from_score(report.overall_match),
            report,
        })
        .collect()
}

pub fn rank_candidates(
    scorer: &dyn MatchScorer,
    job: &JobRequirements,
    candidates: &[CandidateProfile],
) -> Vec<RankedCandidate> {
    let reports = candidates
        .iter()
        .map(|candidate| scorer.score(candidate, job))
        .collect();
    rank_reports(reports)
}
