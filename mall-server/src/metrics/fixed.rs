use super::{MetricsProvider, StoreMetrics};
use shared::models::Store;
use std::collections::HashMap;

/// Injected metrics keyed by store id, with a fallback for the rest
#[derive(Debug, Clone)]
pub struct FixedMetrics {
    by_store: HashMap<String, StoreMetrics>,
    fallback: StoreMetrics,
}

impl FixedMetrics {
    pub fn new(fallback: StoreMetrics) -> Self {
        Self {
            by_store: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, store_id: impl Into<String>, metrics: StoreMetrics) -> Self {
        self.by_store.insert(store_id.into(), metrics);
        self
    }
}

impl MetricsProvider for FixedMetrics {
    fn metrics(&self, store: &Store) -> StoreMetrics {
        self.by_store
            .get(&store.store_id)
            .unwrap_or(&self.fallback)
            .clone()
    }
}
