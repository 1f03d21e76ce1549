//! Per-unit option upcharges.
//!
//! Flavors, shape, icing, decorations and dietary restrictions are all
//! priced the same way: look each selected identifier up in its table
//! (unknown identifiers cost nothing), sum, then multiply by the number of
//! cake units in the order.

use std::collections::BTreeMap;

use crate::config::PricingRulesTable;
use crate::error::EngineResult;
use crate::models::{AuditStep, OrderConfiguration};

use super::line_item::{LineItemResult, checked_mul, format_cents};
use super::priced_lookup::sum_priced;

/// Describes one upcharge rule for the shared calculation.
struct UpchargeRule<'a> {
    rule_id: &'a str,
    rule_name: &'a str,
    table: &'a BTreeMap<String, u64>,
}

fn calculate_upcharge<S: AsRef<str>>(
    rule: UpchargeRule<'_>,
    selected: &[S],
    cake_quantity: u64,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    let mut selected: Vec<&str> = selected.iter().map(|s| s.as_ref()).collect();
    selected.retain(|s| !s.is_empty());
    let sum = sum_priced(rule.rule_id, rule.table, &selected)?;
    let amount = checked_mul(rule.rule_id, sum.total, cake_quantity)?;

    let mut reasoning = if sum.matched.is_empty() {
        "No priced selections".to_string()
    } else {
        let parts: Vec<String> = sum
            .matched
            .iter()
            .map(|(id, price)| format!("{} {}", id, format_cents(*price)))
            .collect();
        format!(
            "({}) × {} cake(s) = {}",
            parts.join(" + "),
            cake_quantity,
            format_cents(amount)
        )
    };
    if !sum.ignored.is_empty() {
        reasoning.push_str(&format!(
            "; ignored unrecognized: {}",
            sum.ignored.join(", ")
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: rule.rule_id.to_string(),
        rule_name: rule.rule_name.to_string(),
        input: serde_json::json!({
            "selected": selected,
            "cake_quantity": cake_quantity
        }),
        output: serde_json::json!({
            "per_cake": sum.total,
            "ignored": sum.ignored,
            "amount": amount
        }),
        reasoning,
    };

    Ok(LineItemResult { amount, audit_step })
}

/// Calculates flavor upcharges: each selected flavor, on every cake unit.
///
/// Duplicate flavors are charged once per occurrence.
pub fn calculate_flavor_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    calculate_upcharge(
        UpchargeRule {
            rule_id: "flavor_price",
            rule_name: "Flavor Upcharge",
            table: &rules.flavor_prices,
        },
        &order.flavors,
        order.cake_quantity(),
        step_number,
    )
}

/// Calculates the shape upcharge on every cake unit.
pub fn calculate_shape_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    calculate_upcharge(
        UpchargeRule {
            rule_id: "shape_price",
            rule_name: "Shape Upcharge",
            table: &rules.shape_prices,
        },
        std::slice::from_ref(&order.shape),
        order.cake_quantity(),
        step_number,
    )
}

/// Calculates the icing upcharge on every cake unit.
pub fn calculate_icing_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    calculate_upcharge(
        UpchargeRule {
            rule_id: "icing_price",
            rule_name: "Icing Upcharge",
            table: &rules.icing_type_prices,
        },
        std::slice::from_ref(&order.icing_type),
        order.cake_quantity(),
        step_number,
    )
}

/// Calculates decoration upcharges: each decoration, on every cake unit.
pub fn calculate_decoration_total(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    calculate_upcharge(
        UpchargeRule {
            rule_id: "decoration_total",
            rule_name: "Decorations",
            table: &rules.decoration_prices,
        },
        &order.decorations,
        order.cake_quantity(),
        step_number,
    )
}

/// Calculates dietary upcharges on every cake unit.
///
/// Restrictions stack: selecting both `eggless` and `vegan` charges both.
pub fn calculate_dietary_upcharge(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    calculate_upcharge(
        UpchargeRule {
            rule_id: "dietary_upcharge",
            rule_name: "Dietary Restrictions",
            table: &rules.dietary_prices,
        },
        &order.dietary_restrictions,
        order.cake_quantity(),
        step_number,
    )
}
