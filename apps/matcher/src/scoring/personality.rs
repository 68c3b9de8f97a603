//! Personality Scorer — per-trait distance between candidate and ideal profile.
//!
//! The ideal profile decides which traits are scored. For each trait:
//! `match = max(0, 100 - |candidate - ideal|)`, with an absent candidate trait scoring 0.
//! `personality_fit` is the rounded mean of the per-trait matches.

use std::collections::BTreeMap;

use crate::models::profile::PercentScores;
use crate::models::report::TraitMatch;
use crate::scoring::normalise::{clamp_percent, safe_score, MAX_PERCENT};

/// Which side of the comparison a coerced value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSide {
    Candidate,
    Ideal,
}

impl ScoreSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSide::Candidate => "candidate",
            ScoreSide::Ideal => "ideal",
        }
    }
}

/// A non-finite input that the safe-score guard replaced with 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercedValue {
    pub trait_name: String,
    pub side: ScoreSide,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalityResult {
    pub profile: BTreeMap<String, TraitMatch>,
    pub personality_fit: u32, // 0 – 100
    /// Reported, never fatal.
    pub coerced: Vec<CoercedValue>,
}

pub fn score_personality(candidate: &PercentScores, ideal: &PercentScores) -> PersonalityResult {
    let mut profile = BTreeMap::new();
    let mut coerced = Vec::new();
    let mut match_sum = 0.0_f64;

    for (trait_name, ideal_raw) in ideal.iter() {
        let candidate_score = candidate
            .get(trait_name)
            .map(|raw| guarded(raw, trait_name, ScoreSide::Candidate, &mut coerced))
            .unwrap_or(0.0);
        let ideal_score = guarded(ideal_raw, trait_name, ScoreSide::Ideal, &mut coerced);

        let trait_match = (MAX_PERCENT - (candidate_score - ideal_score).abs()).max(0.0);
        match_sum += trait_match;

        profile.insert(
            trait_name.to_string(),
            TraitMatch {
                candidate: clamp_percent(candidate_score),
                ideal: clamp_percent(ideal_score),
                score: clamp_percent(trait_match),
            },
        );
    }

    let personality_fit = if profile.is_empty() {
        0
    } else {
        clamp_percent(match_sum / profile.len() as f64)
    };

    PersonalityResult {
        profile,
        personality_fit,
        coerced,
    }
}

fn guarded(raw: f64, trait_name: &str, side: ScoreSide, coerced: &mut Vec<CoercedValue>) -> f64 {
    if !raw.is_finite() {
        coerced.push(CoercedValue {
            trait_name: trait_name.to_string(),
            side,
        });
    }
    safe_score(raw)
}
