use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::ProgramCatalog;
use super::domain::{ClientProfile, Program, Recommendation};
use super::engine::MatchEngine;
use super::repository::{RecommendationStore, StoreError, StoredRecommendation};
use super::synthesize::{CreditAccount, FinancialSignals, ProfileSynthesizer};

/// Result cut-offs for the two recommendation entry points. Derived profiles
/// get a shorter list because their inputs are lower confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    pub direct_top_n: usize,
    pub derived_top_n: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            direct_top_n: 8,
            derived_top_n: 6,
        }
    }
}

static RECOMMENDATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_recommendation_id() -> String {
    let id = RECOMMENDATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("rec-{id:06}")
}

/// Service composing the catalog, scoring engine, profile synthesizer, and
/// optional persistence collaborator.
pub struct ReliefService<S> {
    catalog: ProgramCatalog,
    engine: MatchEngine,
    synthesizer: ProfileSynthesizer,
    store: Arc<S>,
    limits: RecommendationLimits,
}

/// Recommendations produced from extracted credit data, returned with the
/// derived profile so callers can display what the heuristics inferred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditProfileReport {
    pub profile: ClientProfile,
    pub signals: FinancialSignals,
    pub accounts_analyzed: usize,
    pub recommendations: Vec<Recommendation>,
}

impl<S> ReliefService<S>
where
    S: RecommendationStore + 'static,
{
    pub fn new(
        catalog: ProgramCatalog,
        engine: MatchEngine,
        store: Arc<S>,
        limits: RecommendationLimits,
    ) -> Self {
        Self {
            catalog,
            engine,
            synthesizer: ProfileSynthesizer::keyword(),
            store,
            limits,
        }
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn programs(&self) -> &[Program] {
        self.catalog.programs()
    }

    pub fn program(&self, slug: &str) -> Option<&Program> {
        self.catalog.get(slug)
    }

    /// Rank programs for a user-submitted profile. When `user_id` is given,
    /// every returned recommendation is persisted as proposed.
    pub fn recommend_direct(
        &self,
        profile: &ClientProfile,
        user_id: Option<&str>,
    ) -> Result<Vec<Recommendation>, ReliefServiceError> {
        let recommendations =
            self.engine
                .recommend(profile, &self.catalog, self.limits.direct_top_n);
        info!(
            count = recommendations.len(),
            persisted = user_id.is_some(),
            "ranked relief programs for direct profile"
        );
        self.persist(&recommendations, user_id)?;
        Ok(recommendations)
    }

    /// Derive a profile from extracted credit accounts, then rank programs
    /// for it with the shorter derived-profile cut-off.
    pub fn recommend_from_credit(
        &self,
        accounts: &[CreditAccount],
        user_id: Option<&str>,
    ) -> Result<CreditProfileReport, ReliefServiceError> {
        let derived = self.synthesizer.synthesize(accounts);
        let recommendations =
            self.engine
                .recommend(&derived.profile, &self.catalog, self.limits.derived_top_n);
        info!(
            accounts = accounts.len(),
            count = recommendations.len(),
            "ranked relief programs for credit-derived profile"
        );
        self.persist(&recommendations, user_id)?;
        Ok(CreditProfileReport {
            profile: derived.profile,
            signals: derived.signals,
            accounts_analyzed: accounts.len(),
            recommendations,
        })
    }

    /// Saved recommendations for a user, most recent first.
    pub fn saved_recommendations(
        &self,
        user_id: &str,
    ) -> Result<Vec<StoredRecommendation>, ReliefServiceError> {
        Ok(self.store.list_for_user(user_id)?)
    }

    fn persist(
        &self,
        recommendations: &[Recommendation],
        user_id: Option<&str>,
    ) -> Result<(), ReliefServiceError> {
        let Some(user_id) = user_id else {
            return Ok(());
        };
        for recommendation in recommendations {
            let record =
                StoredRecommendation::proposed(next_recommendation_id(), user_id, recommendation);
            self.store.insert(record)?;
        }
        Ok(())
    }
}

/// Error raised by the relief service.
#[derive(Debug, thiserror::Error)]
pub enum ReliefServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
