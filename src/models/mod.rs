//! Core data models for the cake pricing engine.
//!
//! This module contains the normalized order and the priced output types.

mod order;
mod price_breakdown;

pub use order::OrderConfiguration;
pub use price_breakdown::{AuditStep, AuditTrace, PriceBreakdown, PriceQuote};
