use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use relief_finder::matching::{RecommendationStore, StoreError, StoredRecommendation};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local recommendation store backing the HTTP service. Swap in a
/// database-backed implementation without touching the router.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationStore {
    records: Arc<Mutex<Vec<StoredRecommendation>>>,
}

impl RecommendationStore for InMemoryRecommendationStore {
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
