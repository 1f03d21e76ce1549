//! Cake Pricing Engine
//!
//! This crate prices custom cake orders for a storefront: it normalizes a
//! loosely-typed order, applies the pricing rules table, and returns an
//! itemized breakdown in integer cents, served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
