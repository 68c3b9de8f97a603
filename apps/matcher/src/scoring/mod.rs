// Matching engine: skill matching, personality scoring, and report composition.
// Everything here is pure: no I/O, no clock, no shared mutable state.

pub mod composer;
pub mod normalise;
pub mod personality;
pub mod skills;
pub mod weights;
