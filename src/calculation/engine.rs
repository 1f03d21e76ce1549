//! The pricing engine entry point.
//!
//! [`calculate_price`] validates a normalized order, applies a template
//! override if one matches, otherwise prices each line item in turn, and
//! returns the breakdown with its audit trace.

use tracing::debug;

use crate::config::PricingRulesTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, OrderConfiguration, PriceBreakdown, PriceQuote};

use super::base_price::calculate_base_price;
use super::layer_price::calculate_layer_price;
use super::line_item::{LineItemResult, checked_add, format_cents};
use super::template::apply_template;
use super::upcharges::{
    calculate_decoration_total, calculate_dietary_upcharge, calculate_flavor_price,
    calculate_icing_price, calculate_shape_price,
};

type LineItemFn =
    fn(&OrderConfiguration, &PricingRulesTable, u32) -> EngineResult<LineItemResult>;

/// Line-item rules in breakdown order.
const LINE_ITEMS: [LineItemFn; 7] = [
    calculate_base_price,
    calculate_layer_price,
    calculate_flavor_price,
    calculate_shape_price,
    calculate_decoration_total,
    calculate_icing_price,
    calculate_dietary_upcharge,
];

/// Prices an order against one rules snapshot.
///
/// This is a pure function: no I/O, no shared state, and the same order and
/// rules always produce the same quote.
///
/// # Errors
///
/// - `NoCakesSelected` if the order has no cakes of either size
/// - `BasePriceNotFound` if the rules lack a base price for an ordered size
/// - `PriceOverflow` if any amount does not fit in `u64` cents
///
/// # Examples
///
/// ```
/// use cake_pricing::calculation::calculate_price;
/// use cake_pricing::config::ConfigLoader;
/// use cake_pricing::models::OrderConfiguration;
///
/// let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
/// let order = OrderConfiguration {
///     six_inch_cakes: 1,
///     eight_inch_cakes: 1,
///     shape: "round".to_string(),
///     icing_type: "butter".to_string(),
///     ..OrderConfiguration::default()
/// };
///
/// let quote = calculate_price(&order, &rules).unwrap();
/// assert_eq!(quote.breakdown.base_price, 23500);
/// assert_eq!(quote.breakdown.total_price, 23500);
/// ```
pub fn calculate_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
) -> EngineResult<PriceQuote> {
    let cake_quantity = order.cake_quantity();
    if cake_quantity == 0 {
        return Err(EngineError::NoCakesSelected);
    }

    let mut steps = vec![validation_step(order, 1)];

    if let Some(template) = apply_template(order, rules, 2) {
        steps.push(template.audit_step);
        return Ok(finish(template.breakdown, steps, rules));
    }

    let mut amounts = [0u64; 7];
    for (slot, calculate) in amounts.iter_mut().zip(LINE_ITEMS) {
        let result = calculate(order, rules, steps.len() as u32 + 1)?;
        steps.push(result.audit_step);
        *slot = result.amount;
    }
    let [
        base_price,
        layer_price,
        flavor_price,
        shape_price,
        decoration_total,
        icing_price,
        dietary_upcharge,
    ] = amounts;

    let mut breakdown = PriceBreakdown {
        base_price,
        layer_price,
        flavor_price,
        shape_price,
        decoration_total,
        icing_price,
        dietary_upcharge,
        photo_price: 0,
        total_price: 0,
        cake_quantity,
    };

    breakdown.total_price = breakdown
        .line_items()
        .iter()
        .try_fold(0u64, |acc, (_, amount)| checked_add("total_price", acc, *amount))?;

    let step_number = steps.len() as u32 + 1;
    steps.push(total_step(&breakdown, step_number));
    Ok(finish(breakdown, steps, rules))
}

fn finish(
    breakdown: PriceBreakdown,
    steps: Vec<AuditStep>,
    rules: &PricingRulesTable,
) -> PriceQuote {
    for step in &steps {
        debug!(
            step = step.step_number,
            rule = %step.rule_id,
            reasoning = %step.reasoning,
            "Pricing step"
        );
    }

    PriceQuote {
        breakdown,
        audit_trace: AuditTrace {
            rules_version: rules.version.clone(),
            steps,
        },
    }
}

fn validation_step(order: &OrderConfiguration, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "order_validation".to_string(),
        rule_name: "Order Validation".to_string(),
        input: serde_json::json!({
            "six_inch_cakes": order.six_inch_cakes,
            "eight_inch_cakes": order.eight_inch_cakes
        }),
        output: serde_json::json!({
            "cake_quantity": order.cake_quantity(),
            "valid": true
        }),
        reasoning: format!(
            "{} 6-inch + {} 8-inch = {} cake(s)",
            order.six_inch_cakes,
            order.eight_inch_cakes,
            order.cake_quantity()
        ),
    }
}

fn total_step(breakdown: &PriceBreakdown, step_number: u32) -> AuditStep {
    let items: serde_json::Map<String, serde_json::Value> = breakdown
        .line_items()
        .iter()
        .map(|(name, amount)| (name.to_string(), serde_json::json!(amount)))
        .collect();

    AuditStep {
        step_number,
        rule_id: "total_price".to_string(),
        rule_name: "Total".to_string(),
        input: serde_json::Value::Object(items),
        output: serde_json::json!({ "total_price": breakdown.total_price }),
        reasoning: format!("Sum of line items = {}", format_cents(breakdown.total_price)),
    }
}
