//! Snapshot store for the live pricing rules table.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::error::EngineResult;

use super::loader::ConfigLoader;
use super::types::PricingRulesTable;

/// Holds the current pricing rules as an immutable snapshot.
///
/// Readers clone the `Arc` and price against that snapshot for the whole
/// calculation. Writers replace the reference in one step, so a calculation
/// never observes a half-updated table.
#[derive(Debug)]
pub struct RulesStore {
    current: RwLock<Arc<PricingRulesTable>>,
}

impl RulesStore {
    /// Creates a store holding the given table.
    pub fn new(table: PricingRulesTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<PricingRulesTable> {
        // The guarded value is a plain Arc, so a poisoned lock is still usable.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swaps in a new table, returning the previous snapshot.
    pub fn replace(&self, table: PricingRulesTable) -> Arc<PricingRulesTable> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    /// Loads a table from `path` and swaps it in.
    ///
    /// The current snapshot is left untouched if loading or validation fails.
    pub fn reload_from<P: AsRef<Path>>(&self, path: P) -> EngineResult<Arc<PricingRulesTable>> {
        let table = ConfigLoader::load(path)?;
        let version = table.version.clone();
        let previous = self.replace(table);
        info!(
            previous_version = %previous.version,
            version = %version,
            "Pricing rules reloaded"
        );
        Ok(self.snapshot())
    }
}
