use std::sync::Arc;

use crate::config::Config;
use crate::observe::TracingObserver;
use crate::scoring::composer::{MatchScorer, WeightedMatchScorer};

/// Shared state handed to every command.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: WeightedMatchScorer reporting through tracing.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(WeightedMatchScorer::new(Arc::new(TracingObserver)));
        Self { config, scorer }
    }
}
