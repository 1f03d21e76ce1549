//! Priced lookup: identifier-to-upcharge with a zero default.
//!
//! Every upcharge table (flavors, icing types, decorations, dietary
//! restrictions, shapes) goes through these helpers, so an unknown
//! identifier is priced at zero in exactly one place.

use std::collections::BTreeMap;

use crate::error::EngineResult;

use super::line_item::checked_add;

/// Looks up the upcharge for `key`, defaulting to zero.
///
/// # Examples
///
/// ```
/// use cake_pricing::calculation::priced_lookup;
/// use std::collections::BTreeMap;
///
/// let table = BTreeMap::from([("heart".to_string(), 1000)]);
/// assert_eq!(priced_lookup(&table, "heart"), 1000);
/// assert_eq!(priced_lookup(&table, "hexagon"), 0);
/// ```
pub fn priced_lookup(table: &BTreeMap<String, u64>, key: &str) -> u64 {
    table.get(key).copied().unwrap_or(0)
}

/// The per-unit sum over a list of identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricedSum {
    /// Sum of the upcharges of every recognized identifier.
    pub total: u64,
    /// Recognized identifiers and their upcharges, in input order.
    pub matched: Vec<(String, u64)>,
    /// Identifiers with no entry in the table, in input order.
    pub ignored: Vec<String>,
}

/// Sums the upcharges of `keys`, counting duplicates each time.
///
/// Unknown identifiers contribute nothing and are reported in
/// [`PricedSum::ignored`].
pub fn sum_priced<S: AsRef<str>>(
    component: &str,
    table: &BTreeMap<String, u64>,
    keys: &[S],
) -> EngineResult<PricedSum> {
    let mut sum = PricedSum::default();
    for key in keys {
        let key = key.as_ref();
        match table.get(key) {
            Some(&price) => {
                sum.total = checked_add(component, sum.total, price)?;
                sum.matched.push((key.to_string(), price));
            }
            None => sum.ignored.push(key.to_string()),
        }
    }
    Ok(sum)
}
