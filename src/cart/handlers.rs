//! REST API handlers for cart and shipping operations
//!
//! This module implements HTTP endpoints for cart synchronization, shipping
//! quotes and checkout.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::ApiError;
use crate::shipping::{countries, CountryMapping};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart and shipping operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/sync_cart", post(sync_cart))
        .route("/checkout", post(checkout))
        .route("/shipping/quote", post(shipping_quote))
        .route("/shipping/options", post(shipping_options))
        .route("/shipping/countries", get(shipping_countries))
}

/// Endpoint: POST /sync_cart
/// Updates the backend state to match the frontend state exactly.
async fn sync_cart(
    State(state): State<SharedState>,
    Json(payload): Json<AddToCartInput>,
) -> Result<Json<SyncResponse>, ApiError> {
    validate_items(&payload.items)?;
    let cart_id = get_or_create_cart_id(payload.cart_id);

    state.carts.insert(cart_id.clone(), payload.items);

    Ok(Json(SyncResponse {
        status: "updated".to_string(),
        cart_id,
    }))
}

/// Endpoint: POST /shipping/quote
/// Quotes standard shipping for a stored cart or inline items
async fn shipping_quote(
    State(state): State<SharedState>,
    Json(payload): Json<QuoteInput>,
) -> Result<Json<QuoteResponse>, ApiError> {
    build_quote(&state, &payload).map(Json)
}

/// Endpoint: POST /shipping/options
/// Lists economy/standard/priority options, or the local flat rate
async fn shipping_options(
    State(state): State<SharedState>,
    Json(payload): Json<QuoteInput>,
) -> Result<Json<OptionsResponse>, ApiError> {
    build_options(&state, &payload).map(Json)
}

/// Endpoint: GET /shipping/countries
/// Countries with an explicit zone; anything else ships under the fallback zone
async fn shipping_countries() -> Json<&'static [CountryMapping]> {
    Json(countries())
}

/// Endpoint: POST /checkout
/// Clears the cart and returns a receipt with the final shipping charge
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    checkout_cart(&state, payload).map(Json)
}
