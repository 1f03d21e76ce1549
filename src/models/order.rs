//! Order configuration model.

use serde::{Deserialize, Serialize};

/// A normalized cake order, ready to be priced.
///
/// Built from a raw [`PriceRequest`](crate::api::PriceRequest); every field
/// has already been coerced, so the engine never sees strings where numbers
/// are expected.
///
/// # Example
///
/// ```
/// use cake_pricing::models::OrderConfiguration;
///
/// let order = OrderConfiguration {
///     six_inch_cakes: 2,
///     eight_inch_cakes: 1,
///     layers: 2,
///     shape: "heart".to_string(),
///     flavors: vec!["chocolate".to_string()],
///     icing_type: "butter".to_string(),
///     ..OrderConfiguration::default()
/// };
/// assert_eq!(order.cake_quantity(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfiguration {
    /// Number of 6-inch cakes.
    pub six_inch_cakes: u32,
    /// Number of 8-inch cakes.
    pub eight_inch_cakes: u32,
    /// Layers per cake, applied uniformly across the order.
    pub layers: u32,
    /// Shape identifier.
    pub shape: String,
    /// Selected flavors; duplicates are charged twice.
    pub flavors: Vec<String>,
    /// Icing type identifier.
    pub icing_type: String,
    /// Selected decorations.
    pub decorations: Vec<String>,
    /// Selected dietary restrictions.
    pub dietary_restrictions: Vec<String>,
    /// Fixed-price template identifier, if any.
    pub template: Option<String>,
    /// Requested servings. Informational only.
    pub servings: Option<u32>,
}

impl Default for OrderConfiguration {
    fn default() -> Self {
        Self {
            six_inch_cakes: 0,
            eight_inch_cakes: 0,
            layers: 1,
            shape: String::new(),
            flavors: Vec::new(),
            icing_type: String::new(),
            decorations: Vec::new(),
            dietary_restrictions: Vec::new(),
            template: None,
            servings: None,
        }
    }
}

impl OrderConfiguration {
    /// Total number of cake units across both sizes.
    pub fn cake_quantity(&self) -> u64 {
        u64::from(self.six_inch_cakes) + u64::from(self.eight_inch_cakes)
    }
}
