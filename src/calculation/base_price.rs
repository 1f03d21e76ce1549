//! Base price calculation.
//!
//! The base price is the per-size unit price times the number of cakes of
//! that size, summed over both sizes.

use crate::config::{EIGHT_INCH, PricingRulesTable, SIX_INCH};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, OrderConfiguration};

use super::line_item::{LineItemResult, checked_add, checked_mul, format_cents};

/// Calculates the base price of an order.
///
/// `base = six_inch_cakes * basePrices["6inch"] + eight_inch_cakes * basePrices["8inch"]`
///
/// # Errors
///
/// - `BasePriceNotFound` if a size with a non-zero count has no base price
/// - `PriceOverflow` if the product does not fit in `u64` cents
pub fn calculate_base_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    let six_total = size_total(SIX_INCH, order.six_inch_cakes, rules)?;
    let eight_total = size_total(EIGHT_INCH, order.eight_inch_cakes, rules)?;
    let amount = checked_add("base_price", six_total, eight_total)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_price".to_string(),
        rule_name: "Base Price".to_string(),
        input: serde_json::json!({
            "six_inch_cakes": order.six_inch_cakes,
            "eight_inch_cakes": order.eight_inch_cakes,
            "six_inch_unit_price": rules.base_price(SIX_INCH),
            "eight_inch_unit_price": rules.base_price(EIGHT_INCH)
        }),
        output: serde_json::json!({
            "six_inch_total": six_total,
            "eight_inch_total": eight_total,
            "amount": amount
        }),
        reasoning: format!(
            "{} × 6-inch ({}) + {} × 8-inch ({}) = {}",
            order.six_inch_cakes,
            format_cents(rules.base_price(SIX_INCH).unwrap_or(0)),
            order.eight_inch_cakes,
            format_cents(rules.base_price(EIGHT_INCH).unwrap_or(0)),
            format_cents(amount)
        ),
    };

    Ok(LineItemResult { amount, audit_step })
}

fn size_total(size: &str, count: u32, rules: &PricingRulesTable) -> EngineResult<u64> {
    if count == 0 {
        return Ok(0);
    }
    let unit_price = rules
        .base_price(size)
        .ok_or_else(|| EngineError::BasePriceNotFound {
            size: size.to_string(),
        })?;
    checked_mul("base_price", u64::from(count), unit_price)
}
