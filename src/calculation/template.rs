//! Fixed-price template override.

use crate::config::PricingRulesTable;
use crate::models::{AuditStep, OrderConfiguration, PriceBreakdown};

use super::line_item::format_cents;

/// The result of applying a template, including the breakdown and audit step.
#[derive(Debug, Clone)]
pub struct TemplateResult {
    /// The template identifier that matched.
    pub template_id: String,
    /// The breakdown: fixed base price, every other line item zero.
    pub breakdown: PriceBreakdown,
    /// The audit step recording this override.
    pub audit_step: AuditStep,
}

/// Applies a recognized template to an order.
///
/// Returns `None` when the order has no template or the identifier matches
/// no template or alias in the rules table; the order is then priced item by
/// item. When a template matches, its fixed price becomes both the base
/// price and the total, and every other field of the order is disregarded.
pub fn apply_template(
    order: &OrderConfiguration,
    rules: &PricingRulesTable,
    step_number: u32,
) -> Option<TemplateResult> {
    let requested = order.template.as_deref()?;
    let (template_id, template) = rules.find_template(requested)?;

    let breakdown = PriceBreakdown {
        base_price: template.price,
        total_price: template.price,
        cake_quantity: order.cake_quantity(),
        ..PriceBreakdown::default()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "template_override".to_string(),
        rule_name: "Template Override".to_string(),
        input: serde_json::json!({
            "template": requested,
            "cake_quantity": order.cake_quantity()
        }),
        output: serde_json::json!({
            "template_id": template_id,
            "name": template.name,
            "price": template.price
        }),
        reasoning: format!(
            "Template '{}' ({}) fixes the price at {}; all other options are not charged",
            template_id,
            template.name,
            format_cents(template.price)
        ),
    };

    Some(TemplateResult {
        template_id: template_id.to_string(),
        breakdown,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn order_with_template(template: Option<&str>) -> OrderConfiguration {
        OrderConfiguration {
            six_inch_cakes: 5,
            eight_inch_cakes: 3,
            layers: 5,
            shape: "heart".to_string(),
            flavors: vec!["chocolate".to_string()],
            template: template.map(str::to_string),
            ..OrderConfiguration::default()
        }
    }

    #[test]
    fn test_recognized_template_overrides_everything() {
        let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
        let result = apply_template(&order_with_template(Some("fathers-day")), &rules, 2).unwrap();
        let price = rules.templates["fathers-day"].price;

        assert_eq!(result.template_id, "fathers-day");
        assert_eq!(result.breakdown.base_price, price);
        assert_eq!(result.breakdown.total_price, price);
        assert_eq!(result.breakdown.layer_price, 0);
        assert_eq!(result.breakdown.flavor_price, 0);
        assert_eq!(result.breakdown.shape_price, 0);
        assert_eq!(result.breakdown.cake_quantity, 8);
        assert_eq!(result.audit_step.step_number, 2);
    }

    #[test]
    fn test_alias_selects_same_template() {
        let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
        let by_id = apply_template(&order_with_template(Some("fathers-day")), &rules, 1).unwrap();
        let by_alias = apply_template(&order_with_template(Some("999")), &rules, 1).unwrap();

        assert_eq!(by_id.breakdown, by_alias.breakdown);
    }

    #[test]
    fn test_unknown_or_missing_template_does_not_apply() {
        let rules = ConfigLoader::load("./config/pricing.yaml").unwrap();
        assert!(apply_template(&order_with_template(Some("birthday")), &rules, 1).is_none());
        assert!(apply_template(&order_with_template(None), &rules, 1).is_none());
    }
}
