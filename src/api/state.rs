//! Application state for the cake pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{PricingRulesTable, RulesStore};

/// Shared application state.
///
/// Holds the rules store. Handlers take one snapshot per request, so a
/// reload during a calculation does not affect it.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RulesStore>,
}

impl AppState {
    /// Creates a new application state serving the given rules table.
    pub fn new(rules: PricingRulesTable) -> Self {
        Self::with_store(Arc::new(RulesStore::new(rules)))
    }

    /// Creates a new application state sharing an existing store.
    pub fn with_store(rules: Arc<RulesStore>) -> Self {
        Self { rules }
    }

    /// Returns the rules store.
    pub fn rules_store(&self) -> &Arc<RulesStore> {
        &self.rules
    }

    /// Returns the current rules snapshot.
    pub fn rules(&self) -> Arc<PricingRulesTable> {
        self.rules.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
        let state = AppState::new(rules.clone());
        let clone = state.clone();

        let mut updated = rules;
        updated.version = "updated".to_string();
        state.rules_store().replace(updated);

        assert_eq!(clone.rules().version, "updated");
    }
}
