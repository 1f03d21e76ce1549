//! Shared line-item plumbing: checked cent arithmetic and display formatting.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of pricing one line item, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct LineItemResult {
    /// The line item amount in cents.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Multiplies two cent quantities, failing with `PriceOverflow` for `component`.
pub fn checked_mul(component: &str, a: u64, b: u64) -> EngineResult<u64> {
    a.checked_mul(b).ok_or_else(|| overflow(component))
}

/// Adds two cent quantities, failing with `PriceOverflow` for `component`.
pub fn checked_add(component: &str, a: u64, b: u64) -> EngineResult<u64> {
    a.checked_add(b).ok_or_else(|| overflow(component))
}

fn overflow(component: &str) -> EngineError {
    EngineError::PriceOverflow {
        component: component.to_string(),
    }
}

/// Formats cents as a dollar string for audit reasoning, e.g. `"$80.00"`.
///
/// Display only; no pricing arithmetic goes through `Decimal`.
pub fn format_cents(cents: u64) -> String {
    match i64::try_from(cents) {
        Ok(c) => format!("${}", Decimal::new(c, 2)),
        Err(_) => format!("{}c", cents),
    }
}
