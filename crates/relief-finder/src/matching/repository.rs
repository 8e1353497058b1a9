use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Recommendation;

/// Status a stored recommendation starts in; downstream tooling advances it.
pub const PROPOSED_STATUS: &str = "proposed";

/// Persisted recommendation row for a user, written when a caller supplies a
/// user identifier. Profiles themselves are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecommendation {
    pub id: String,
    pub user_id: String,
    pub program_slug: String,
    pub why: String,
    pub confidence: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl StoredRecommendation {
    pub fn proposed(id: String, user_id: &str, recommendation: &Recommendation) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            program_slug: recommendation.program_slug.clone(),
            why: recommendation.why_recommended.clone(),
            confidence: recommendation.confidence,
            status: PROPOSED_STATUS.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// The core never requires persistence; callers may recommend purely for
/// ephemeral display.
pub trait RecommendationStore: Send + Sync {
    fn insert(&self, record: StoredRecommendation) -> Result<(), StoreError>;
    /// Saved records for a user, most recent first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<StoredRecommendation>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
