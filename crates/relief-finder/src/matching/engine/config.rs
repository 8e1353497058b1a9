use serde::{Deserialize, Serialize};

/// Component weights for the match formula. Injected so synthetic weightings
/// can be exercised in tests; the deployed values sum to 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub income: f64,
    pub special_circumstances: f64,
    pub employment: f64,
    pub jurisdiction: f64,
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.income + self.special_circumstances + self.employment + self.jurisdiction
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            income: 4.0,
            special_circumstances: 3.0,
            employment: 2.0,
            jurisdiction: 1.0,
        }
    }
}

/// Filtering and annotation dials applied during ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    /// Programs scoring at or below this are dropped as irrelevant.
    pub min_score: f64,
    /// Fixed optimism bonus layered on the raw score for display, not a
    /// calibrated probability.
    pub confidence_bonus: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.1,
            confidence_bonus: 0.2,
        }
    }
}
