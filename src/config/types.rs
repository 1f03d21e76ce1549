//! Configuration types for cake pricing.
//!
//! This module contains the strongly-typed pricing rules table that is
//! deserialized from the YAML rules file and exposed read-only over HTTP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Size identifier for a 6-inch cake in [`PricingRulesTable::base_prices`].
pub const SIX_INCH: &str = "6inch";

/// Size identifier for an 8-inch cake in [`PricingRulesTable::base_prices`].
pub const EIGHT_INCH: &str = "8inch";

fn default_currency() -> String {
    "USD".to_string()
}

/// A fixed-price special that overrides itemized pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRule {
    /// Display name of the special (e.g. "Father's Day Special").
    pub name: String,
    /// The fixed price in cents.
    pub price: u64,
    /// Alternative identifiers that select this template (e.g. "999").
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The complete pricing rules table.
///
/// Every monetary value is an integer number of cents. Lookups for unknown
/// identifiers in the upcharge maps yield zero; see
/// [`priced_lookup`](crate::calculation::priced_lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRulesTable {
    /// Version label of this table.
    pub version: String,
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// ISO currency code used for display.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Base unit price per cake size.
    pub base_prices: BTreeMap<String, u64>,
    /// Price per extra layer beyond the first, per cake unit.
    #[serde(default)]
    pub layer_price: u64,
    /// Upcharge per flavor, per cake unit.
    #[serde(default)]
    pub flavor_prices: BTreeMap<String, u64>,
    /// Upcharge per icing type, per cake unit.
    #[serde(default)]
    pub icing_type_prices: BTreeMap<String, u64>,
    /// Flat upcharge per decoration, per cake unit.
    #[serde(default)]
    pub decoration_prices: BTreeMap<String, u64>,
    /// Upcharge per dietary restriction, per cake unit.
    #[serde(default)]
    pub dietary_prices: BTreeMap<String, u64>,
    /// Upcharge per shape, per cake unit.
    #[serde(default)]
    pub shape_prices: BTreeMap<String, u64>,
    /// Fixed-price specials keyed by template identifier.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateRule>,
}

impl PricingRulesTable {
    /// Returns the base price for a size identifier, if configured.
    pub fn base_price(&self, size: &str) -> Option<u64> {
        self.base_prices.get(size).copied()
    }

    /// Finds the template selected by an identifier.
    ///
    /// Matching is on the trimmed, lowercased identifier against both the
    /// template keys and their aliases, so `"Fathers-Day"`, `"999"` and the
    /// number `999` (normalized to `"999"`) are equivalent when configured.
    pub fn find_template(&self, identifier: &str) -> Option<(&str, &TemplateRule)> {
        let wanted = normalize_template_id(identifier);
        if wanted.is_empty() {
            return None;
        }
        self.templates
            .iter()
            .find(|(id, rule)| {
                normalize_template_id(id) == wanted
                    || rule
                        .aliases
                        .iter()
                        .any(|alias| normalize_template_id(alias) == wanted)
            })
            .map(|(id, rule)| (id.as_str(), rule))
    }
}

/// Normalizes a template identifier for matching.
pub(crate) fn normalize_template_id(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}
