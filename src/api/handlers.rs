//! HTTP request handlers for the cake pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_price;
use crate::models::{OrderConfiguration, PriceQuote};

use super::request::PriceRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate-price", post(calculate_price_handler))
        .route("/api/calculate-price/explain", post(explain_price_handler))
        .route("/api/pricing-structure", get(pricing_structure_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /api/calculate-price.
///
/// Returns the itemized [`PriceBreakdown`](crate::models::PriceBreakdown).
async fn calculate_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Response {
    match price_request(&state, payload) {
        Ok(quote) => json_ok(&quote.breakdown),
        Err(err) => err.into_response(),
    }
}

/// Handler for POST /api/calculate-price/explain.
///
/// Same input as `/api/calculate-price`; returns the breakdown together
/// with the audit trace of every rule applied.
async fn explain_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Response {
    match price_request(&state, payload) {
        Ok(quote) => json_ok(&quote),
        Err(err) => err.into_response(),
    }
}

/// Handler for GET /api/pricing-structure.
async fn pricing_structure_handler(State(state): State<AppState>) -> Response {
    let rules = state.rules();
    json_ok(rules.as_ref())
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Response {
    let rules = state.rules();
    json_ok(&serde_json::json!({
        "status": "ok",
        "rulesVersion": rules.version
    }))
}

fn json_ok<T: serde::Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Parses, normalizes and prices one request against the current snapshot.
fn price_request(
    state: &AppState,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<PriceQuote, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected price request body"
            );
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let order: OrderConfiguration = request.into();
    let rules = state.rules();

    let start_time = Instant::now();
    match calculate_price(&order, &rules) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                rules_version = %rules.version,
                cake_quantity = quote.breakdown.cake_quantity,
                template = order.template.as_deref().unwrap_or(""),
                total_price = quote.breakdown.total_price,
                duration_us = start_time.elapsed().as_micros(),
                "Price calculated"
            );
            Ok(quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Price calculation failed"
            );
            Err(err.into())
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => ApiError::malformed_json(err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
