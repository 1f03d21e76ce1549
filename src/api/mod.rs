//! HTTP API module for the cake pricing engine.
//!
//! This module provides the REST endpoints the storefront calls to price
//! cake orders and to read the current pricing structure.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PriceRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
