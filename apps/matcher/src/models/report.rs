use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::profile::CandidateMeta;

/// Counts of the three skill-breakdown sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub perfect_skill_match: usize,
    /// Number of extra (non-required) candidate skills.
    pub partial_skill_match: usize,
    pub missing_skills: usize,
}

/// Disjoint partition of `candidate ∪ required` skill tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsBreakdown {
    /// candidate ∩ required, candidate order
    pub perfect_matches: Vec<String>,
    /// candidate − required, candidate order. Historically named "partial"; these are extras.
    pub partial_matches: Vec<String>,
    /// required − candidate, required order
    pub missing_matches: Vec<String>,
}

impl SkillsBreakdown {
    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            perfect_skill_match: self.perfect_matches.len(),
            partial_skill_match: self.partial_matches.len(),
            missing_skills: self.missing_matches.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraitMatch {
    pub candidate: u32,
    pub ideal: u32,
    #[serde(rename = "match")]
    pub score: u32,
}

/// Final match report for one (candidate, job) pair. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    #[serde(flatten)]
    pub candidate: CandidateMeta,
    pub overall_match: u32,   // 0 – 100
    pub skills_match: u32,    // 0 – 100
    pub personality_fit: u32, // 0 – 100
    pub quick_stats: QuickStats,
    pub skills_breakdown: SkillsBreakdown,
    pub personality_profile: BTreeMap<String, TraitMatch>,
}
