use std::sync::{Arc, Mutex};

use crate::matching::catalog::ProgramCatalog;
use crate::matching::domain::{
    ClientProfile, Eligibility, EmploymentStatus, Jurisdiction, Program,
};
use crate::matching::engine::{MatchEngine, MatchWeights, RecommendationPolicy};
use crate::matching::fpl::FplTable;
use crate::matching::repository::{RecommendationStore, StoreError, StoredRecommendation};
use crate::matching::service::{RecommendationLimits, ReliefService};

pub(super) fn match_engine() -> MatchEngine {
    MatchEngine::new(
        FplTable::guidelines_2023(),
        MatchWeights::default(),
        RecommendationPolicy::default(),
    )
}

/// The spec profile used by both scoring scenarios: low income, single
/// household, unemployed.
pub(super) fn unemployed_profile() -> ClientProfile {
    ClientProfile {
        income: Some(10_000),
        household_size: Some(1),
        employment_status: EmploymentStatus::Unemployed,
        ..ClientProfile::default()
    }
}

pub(super) fn employed_profile() -> ClientProfile {
    ClientProfile {
        income: Some(10_000),
        household_size: Some(1),
        employment_status: EmploymentStatus::Employed,
        ..ClientProfile::default()
    }
}

pub(super) fn bare_program(slug: &str, income_threshold_pct: u32) -> Program {
    Program {
        slug: slug.to_string(),
        title: slug.to_string(),
        description: "synthetic test program".to_string(),
        jurisdiction: Jurisdiction::Federal,
        eligibility: Eligibility {
            income_threshold_pct,
            asset_limit: None,
            household_size_based: false,
            employment_required: false,
            special_circumstances: Vec::new(),
        },
        docs_required: Vec::new(),
        benefit_amount: "n/a".to_string(),
        application_method: "n/a".to_string(),
        source_url: "https://example.invalid".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<Vec<StoredRecommendation>>>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<StoredRecommendation> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl RecommendationStore for MemoryStore {
    fn insert(&self, record: StoredRecommendation) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::Conflict);
        }
        guard.push(record);
        Ok(())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<StoredRecommendation>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        let mut matching: Vec<_> = guard
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        matching.reverse();
        Ok(matching)
    }
}

pub(super) struct UnavailableStore;

impl RecommendationStore for UnavailableStore {
    fn insert(&self, _record: StoredRecommendation) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(&self, _user_id: &str) -> Result<Vec<StoredRecommendation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReliefService<MemoryStore>, Arc<MemoryStore>) {
    build_service_with_limits(RecommendationLimits::default())
}

pub(super) fn build_service_with_limits(
    limits: RecommendationLimits,
) -> (ReliefService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = ReliefService::new(
        ProgramCatalog::standard(),
        match_engine(),
        store.clone(),
        limits,
    );
    (service, store)
}
