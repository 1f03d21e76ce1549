//! Price breakdown models for the cake pricing engine.
//!
//! This module contains the [`PriceBreakdown`] returned to clients and the
//! [`PriceQuote`] wrapper that pairs it with the audit trace explaining how
//! each line item was derived.

use serde::{Deserialize, Serialize};

/// The itemized price of an order, in cents.
///
/// Serialized with camelCase field names (`basePrice`, `totalPrice`, ...).
/// `total_price` always equals the sum of the eight line items.
///
/// # Example
///
/// ```
/// use cake_pricing::models::PriceBreakdown;
///
/// let breakdown = PriceBreakdown {
///     base_price: 8000,
///     layer_price: 1500,
///     total_price: 9500,
///     cake_quantity: 1,
///     ..PriceBreakdown::default()
/// };
/// assert_eq!(breakdown.line_item_sum(), Some(breakdown.total_price));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Base price across all cake units.
    pub base_price: u64,
    /// Charge for extra layers.
    pub layer_price: u64,
    /// Flavor upcharges.
    pub flavor_price: u64,
    /// Shape upcharge.
    pub shape_price: u64,
    /// Decoration upcharges.
    pub decoration_total: u64,
    /// Icing upcharge.
    pub icing_price: u64,
    /// Dietary restriction upcharges.
    pub dietary_upcharge: u64,
    /// Reserved for photo prints; always zero.
    pub photo_price: u64,
    /// Sum of all line items.
    pub total_price: u64,
    /// Number of cake units in the order.
    pub cake_quantity: u64,
}

impl PriceBreakdown {
    /// The line items in display order, labelled.
    pub fn line_items(&self) -> [(&'static str, u64); 8] {
        [
            ("base_price", self.base_price),
            ("layer_price", self.layer_price),
            ("flavor_price", self.flavor_price),
            ("shape_price", self.shape_price),
            ("decoration_total", self.decoration_total),
            ("icing_price", self.icing_price),
            ("dietary_upcharge", self.dietary_upcharge),
            ("photo_price", self.photo_price),
        ]
    }

    /// Sum of the line items, or `None` on overflow.
    pub fn line_item_sum(&self) -> Option<u64> {
        self.line_items()
            .iter()
            .try_fold(0u64, |acc, (_, amount)| acc.checked_add(*amount))
    }
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// Version of the rules table that priced the order.
    pub rules_version: String,
    /// All steps, in the order they were applied.
    pub steps: Vec<AuditStep>,
}

/// A priced order: the breakdown plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// The itemized price.
    pub breakdown: PriceBreakdown,
    /// The audit trace.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = PriceBreakdown {
            base_price: 23500,
            total_price: 23500,
            cake_quantity: 2,
            ..PriceBreakdown::default()
        };
        let json = serde_json::to_value(breakdown).unwrap();

        assert_eq!(json["basePrice"], 23500);
        assert_eq!(json["totalPrice"], 23500);
        assert_eq!(json["cakeQuantity"], 2);
        assert_eq!(json["decorationTotal"], 0);
        assert_eq!(json["dietaryUpcharge"], 0);
        assert_eq!(json["photoPrice"], 0);
        assert!(json.get("base_price").is_none());
    }

    #[test]
    fn test_line_item_sum_excludes_total_and_quantity() {
        let breakdown = PriceBreakdown {
            base_price: 100,
            layer_price: 20,
            flavor_price: 3,
            total_price: 999,
            cake_quantity: 50,
            ..PriceBreakdown::default()
        };
        assert_eq!(breakdown.line_item_sum(), Some(123));
    }

    #[test]
    fn test_line_item_sum_detects_overflow() {
        let breakdown = PriceBreakdown {
            base_price: u64::MAX,
            layer_price: 1,
            ..PriceBreakdown::default()
        };
        assert_eq!(breakdown.line_item_sum(), None);
    }
}
