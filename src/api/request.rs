//! Request types for the cake pricing API.
//!
//! This module defines the JSON request body for `/api/calculate-price`.
//! Fields are kept as raw JSON values so a storefront form can send counts
//! as strings or templates as numbers; conversion to an
//! [`OrderConfiguration`] goes through the named coercion steps in
//! [`crate::calculation`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculation::{
    coerce_count, coerce_identifier, coerce_identifier_list, coerce_layers, coerce_servings,
    coerce_template,
};
use crate::models::OrderConfiguration;

/// Request body for the `/api/calculate-price` endpoint.
///
/// Every field is optional and leniently typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    /// Number of 6-inch cakes.
    #[serde(default)]
    pub six_inch_cakes: Value,
    /// Number of 8-inch cakes.
    #[serde(default)]
    pub eight_inch_cakes: Value,
    /// Layers per cake.
    #[serde(default)]
    pub layers: Value,
    /// Requested servings. Not priced.
    #[serde(default)]
    pub servings: Value,
    /// Shape identifier.
    #[serde(default)]
    pub shape: Value,
    /// Flavor identifiers.
    #[serde(default)]
    pub flavors: Value,
    /// Icing type identifier.
    #[serde(default)]
    pub icing_type: Value,
    /// Decoration identifiers.
    #[serde(default)]
    pub decorations: Value,
    /// Dietary restriction identifiers.
    #[serde(default)]
    pub dietary_restrictions: Value,
    /// Fixed-price template selector.
    #[serde(default)]
    pub template: Value,
}

impl From<PriceRequest> for OrderConfiguration {
    fn from(req: PriceRequest) -> Self {
        OrderConfiguration {
            six_inch_cakes: coerce_count(&req.six_inch_cakes),
            eight_inch_cakes: coerce_count(&req.eight_inch_cakes),
            layers: coerce_layers(&req.layers),
            shape: coerce_identifier(&req.shape),
            flavors: coerce_identifier_list(&req.flavors),
            icing_type: coerce_identifier(&req.icing_type),
            decorations: coerce_identifier_list(&req.decorations),
            dietary_restrictions: coerce_identifier_list(&req.dietary_restrictions),
            template: coerce_template(&req.template),
            servings: coerce_servings(&req.servings),
        }
    }
}
