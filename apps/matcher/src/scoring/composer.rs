//! Match Composer — pluggable, trait-based scorer that merges skill and personality results
//! into a `MatchReport`.
//!
//! Default: `WeightedMatchScorer` (0.6 skills / 0.4 personality, pure and deterministic).
//! Callers hold an `Arc<dyn MatchScorer>` so the backend can be swapped without touching them.

use std::sync::Arc;

use crate::models::profile::{CandidateProfile, JobRequirements};
use crate::models::report::MatchReport;
use crate::observe::{MatchEvent, MatchObserver, NoopObserver};
use crate::scoring::normalise::clamp_percent;
use crate::scoring::personality::{score_personality, PersonalityResult};
use crate::scoring::skills::{match_skills, SkillResult};
use crate::scoring::weights::MATCH_WEIGHTS;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one candidate against one job. Implementations must be pure with respect to
/// their inputs: the same pair always yields the same report.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, job: &JobRequirements) -> MatchReport;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. Skill Matcher → `skills_match` + breakdown
/// 2. Personality Scorer → `personality_fit` + per-trait profile
/// 3. overall = round(0.6 × skills_match + 0.4 × personality_fit), clamped to 0 – 100
///
/// The observer only sees results after they are computed; it cannot influence them.
#[derive(Clone)]
pub struct WeightedMatchScorer {
    observer: Arc<dyn MatchObserver>,
}

impl Default for WeightedMatchScorer {
    fn default() -> Self {
        Self::new(Arc::new(NoopObserver))
    }
}

impl WeightedMatchScorer {
    pub fn new(observer: Arc<dyn MatchObserver>) -> Self {
        Self { observer }
    }

    fn emit(
        &self,
        candidate: &CandidateProfile,
        skills: &SkillResult,
        personality: &PersonalityResult,
        overall_match: u32,
    ) {
        let stats = skills.quick_stats();
        self.observer.observe(&MatchEvent::SkillsScored {
            skills_match: skills.skills_match,
            perfect: stats.perfect_skill_match,
            partial: stats.partial_skill_match,
            missing: stats.missing_skills,
        });

        for coerced in &personality.coerced {
            self.observer.observe(&MatchEvent::ValueCoerced {
                trait_name: coerced.trait_name.clone(),
                side: coerced.side,
            });
        }
        for (trait_name, entry) in &personality.profile {
            self.observer.observe(&MatchEvent::TraitScored {
                trait_name: trait_name.clone(),
                candidate: entry.candidate,
                ideal: entry.ideal,
                score: entry.score,
            });
        }
        self.observer.observe(&MatchEvent::PersonalityScored {
            trait_count: personality.profile.len(),
            personality_fit: personality.personality_fit,
        });

        self.observer.observe(&MatchEvent::OverallComposed {
            candidate: candidate.meta.name.clone(),
            overall_match,
        });
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, candidate: &CandidateProfile, job: &JobRequirements) -> MatchReport {
        let skills = match_skills(&candidate.skills, &job.required_skills);
        let personality = score_personality(&candidate.personality, &job.ideal_personality);
        let overall_match = compose_overall(skills.skills_match, personality.personality_fit);

        self.emit(candidate, &skills, &personality, overall_match);

        MatchReport {
            candidate: candidate.meta.clone(),
            overall_match,
            skills_match: skills.skills_match,
            personality_fit: personality.personality_fit,
            quick_stats: skills.quick_stats(),
            skills_breakdown: skills.breakdown,
            personality_profile: personality.profile,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Free functions
// ────────────────────────────────────────────────────────────────────────────

/// `round(0.6 × skills + 0.4 × personality)` through the safe-score guard, in `[0, 100]`.
pub fn compose_overall(skills_match: u32, personality_fit: u32) -> u32 {
    clamp_percent(MATCH_WEIGHTS.combine(skills_match as f64, personality_fit as f64))
}

/// Scores with the default weighted scorer and no observer.
pub fn build_report(candidate: &CandidateProfile, job: &JobRequirements) -> MatchReport {
    WeightedMatchScorer::default().score(candidate, job)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
