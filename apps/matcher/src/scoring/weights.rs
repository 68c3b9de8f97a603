/// Blend of the two component scores into the overall match. Fixed policy: 0.6 / 0.4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub personality: f64,
}

pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.6,
    personality: 0.4,
};

impl Default for MatchWeights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.personality
    }

    /// Unrounded weighted blend: 0.6*skills + 0.4*personality
    pub fn combine(&self, skills: f64, personality: f64) -> f64 {
        self.skills * skills + self.personality * personality
    }
}
