//! Structured match events and the observers that receive them.
//!
//! Scoring functions stay pure; the composer forwards what they computed to an injected
//! `MatchObserver`. Library callers default to `NoopObserver`, the binary uses
//! `TracingObserver`.

use tracing::{debug, warn};

use crate::scoring::personality::ScoreSide;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    SkillsScored {
        skills_match: u32,
        perfect: usize,
        partial: usize,
        missing: usize,
    },
    TraitScored {
        trait_name: String,
        candidate: u32,
        ideal: u32,
        score: u32,
    },
    PersonalityScored {
        trait_count: usize,
        personality_fit: u32,
    },
    /// A non-finite input replaced by 0.
    ValueCoerced {
        trait_name: String,
        side: ScoreSide,
    },
    OverallComposed {
        candidate: Option<String>,
        overall_match: u32,
    },
}

pub trait MatchObserver: Send + Sync {
    fn observe(&self, event: &MatchEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn observe(&self, _event: &MatchEvent) {}
}

/// Emits every event through `tracing`. Coercions are warnings, the rest debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn observe(&self, event: &MatchEvent) {
        match event {
            MatchEvent::SkillsScored {
                skills_match,
                perfect,
                partial,
                missing,
            } => debug!(skills_match, perfect, partial, missing, "skills scored"),
            MatchEvent::TraitScored {
                trait_name,
                candidate,
                ideal,
                score,
            } => debug!(trait_name = %trait_name, candidate, ideal, score, "trait scored"),
            MatchEvent::PersonalityScored {
                trait_count,
                personality_fit,
            } => debug!(trait_count, personality_fit, "personality scored"),
            MatchEvent::ValueCoerced { trait_name, side } => warn!(
                trait_name = %trait_name,
                side = side.as_str(),
                "non-finite personality score coerced to 0"
            ),
            MatchEvent::OverallComposed {
                candidate,
                overall_match,
            } => debug!(
                candidate = candidate.as_deref().unwrap_or("unknown"),
                overall_match,
                "overall match composed"
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Collects events for assertions.
    #[derive(Default)]
    pub struct RecordingObserver {
        events: Mutex<Vec<MatchEvent>>,
    }

    impl RecordingObserver {
        pub fn events(&self) -> Vec<MatchEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl MatchObserver for RecordingObserver {
        fn observe(&self, event: &MatchEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
