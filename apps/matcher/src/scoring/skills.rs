//! Skill Matcher — exact-token comparison of candidate skills against required skills.

use std::collections::HashSet;

use crate::models::report::{QuickStats, SkillsBreakdown};
use crate::scoring::normalise::{clamp_percent, MAX_PERCENT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillResult {
    pub breakdown: SkillsBreakdown,
    pub skills_match: u32, // 0 – 100
}

impl SkillResult {
    pub fn quick_stats(&self) -> QuickStats {
        self.breakdown.quick_stats()
    }
}

/// Partitions `candidate ∪ required` into perfect / partial (extra) / missing.
///
/// Tokens compare by exact string equality. Duplicates collapse to their first occurrence,
/// and each sequence keeps the order of the input it is drawn from.
/// `skills_match = round(|perfect| / |required| * 100)`, or 0 with no requirements.
pub fn match_skills(candidate_skills: &[String], required_skills: &[String]) -> SkillResult {
    let candidate = dedup_in_order(candidate_skills);
    let required = dedup_in_order(required_skills);

    let candidate_set: HashSet<&str> = candidate.iter().copied().collect();
    let required_set: HashSet<&str> = required.iter().copied().collect();

    let (perfect_matches, partial_matches): (Vec<&str>, Vec<&str>) = candidate
        .iter()
        .copied()
        .partition(|skill| required_set.contains(skill));
    let missing_matches: Vec<&str> = required
        .iter()
        .copied()
        .filter(|skill| !candidate_set.contains(skill))
        .collect();

    let skills_match_raw = if required.is_empty() {
        0.0
    } else {
        perfect_matches.len() as f64 / required.len() as f64 * MAX_PERCENT
    };

    SkillResult {
        breakdown: SkillsBreakdown {
            perfect_matches: into_owned(perfect_matches),
            partial_matches: into_owned(partial_matches),
            missing_matches: into_owned(missing_matches),
        },
        skills_match: clamp_percent(skills_match_raw),
    }
}

fn dedup_in_order(tokens: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .map(String::as_str)
        .filter(|token| seen.insert(*token))
        .collect()
}

fn into_owned(tokens: Vec<&str>) -> Vec<String> {
    tokens.into_iter().map(str::to_string).collect()
}
