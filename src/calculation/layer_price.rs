//! Layer price calculation.

use crate::config::PricingRulesTable;
use crate::error::EngineResult;
use crate::models::{AuditStep, OrderConfiguration};

use super::line_item::{LineItemResult, checked_mul, format_cents};

/// Calculates the charge for extra layers.
///
/// The first layer is included in the base price. Each further layer costs
/// `layerPrice` on every cake unit in the order:
///
/// `layer_price = (layers - 1) * layerPrice * cake_quantity`
///
/// # Examples
///
/// ```
/// use cake_pricing::calculation::calculate_layer_price;
/// use cake_pricing::config::ConfigLoader;
/// use cake_pricing::models::OrderConfiguration;
///
/// let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
/// let order = OrderConfiguration {
///     six_inch_cakes: 2,
///     layers: 3,
///     ..OrderConfiguration::default()
/// };
///
/// let result = calculate_layer_price(&order, &rules, 1).unwrap();
/// assert_eq!(result.amount, 2 * rules.layer_price * 2);
/// ```
pub fn calculate_layer_price(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> EngineResult<LineItemResult> {
    let extra_layers = u64::from(order.layers.saturating_sub(1));
    let cake_quantity = order.cake_quantity();

    let per_cake = checked_mul("layer_price", extra_layers, rules.layer_price)?;
    let amount = checked_mul("layer_price", per_cake, cake_quantity)?;

    let reasoning = if extra_layers == 0 {
        "Single layer - no extra layer charge".to_string()
    } else {
        format!(
            "{} extra layer(s) × {} × {} cake(s) = {}",
            extra_layers,
            format_cents(rules.layer_price),
            cake_quantity,
            format_cents(amount)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "layer_price".to_string(),
        rule_name: "Extra Layers".to_string(),
        input: serde_json::json!({
            "layers": order.layers,
            "layer_price": rules.layer_price,
            "cake_quantity": cake_quantity
        }),
        output: serde_json::json!({
            "extra_layers": extra_layers,
            "amount": amount
        }),
        reasoning,
    };

    Ok(LineItemResult { amount, audit_step })
}
