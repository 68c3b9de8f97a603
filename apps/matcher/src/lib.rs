//! Candidate/job match scoring.
//!
//! Turns an extracted candidate profile and a job's requirements into a bounded,
//! reproducible `MatchReport`: skill overlap, personality fit, and their weighted blend.

pub mod config;
pub mod errors;
pub mod loader;
pub mod models;
pub mod observe;
pub mod ranking;
pub mod scoring;
pub mod state;

pub use models::profile::{CandidateProfile, JobRequirements, PercentScores, PersonalityScale};
pub use models::report::MatchReport;
pub use scoring::composer::{build_report, MatchScorer, WeightedMatchScorer};
