//! Calculation logic for the cake pricing engine.
//!
//! This module contains request normalization, the shared priced lookup,
//! one function per line item (base price, extra layers, flavor, shape,
//! icing, decoration and dietary upcharges), the template override, and
//! [`calculate_price`], which ties them together.

mod base_price;
mod engine;
mod layer_price;
mod line_item;
mod normalize;
mod priced_lookup;
mod template;
mod upcharges;

pub use base_price::calculate_base_price;
pub use engine::calculate_price;
pub use layer_price::calculate_layer_price;
pub use line_item::{LineItemResult, format_cents};
pub use normalize::{
    coerce_count, coerce_identifier, coerce_identifier_list, coerce_layers, coerce_servings,
    coerce_template,
};
pub use priced_lookup::{PricedSum, priced_lookup, sum_priced};
pub use template::{TemplateResult, apply_template};
pub use upcharges::{
    calculate_decoration_total, calculate_dietary_upcharge, calculate_flavor_price,
    calculate_icing_price, calculate_shape_price,
};
