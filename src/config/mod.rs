//! Configuration loading and management for the cake pricing engine.
//!
//! This module provides the pricing rules table, its YAML loader, the
//! snapshot store used for hot reload, and the server settings.
//!
//! # Example
//!
//! ```no_run
//! use cake_pricing::config::{ConfigLoader, RulesStore};
//!
//! let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
//! let store = RulesStore::new(rules);
//! println!("Pricing rules version: {}", store.snapshot().version);
//! ```

mod loader;
mod server;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use server::{DEFAULT_RULES_PATH, ServerConfig};
pub use store::RulesStore;
pub use types::{EIGHT_INCH, PricingRulesTable, SIX_INCH, TemplateRule};
