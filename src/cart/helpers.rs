//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations, input
//! validation and the quote/checkout flows shared by REST and MCP.

use super::models::{CheckoutInput, CheckoutResponse, OptionsResponse, QuoteInput, QuoteResponse};
use super::state::AppState;
use crate::error::ApiError;
use crate::shipping::{
    amount_until_free_shipping, calculate_subtotal, calculate_total_weight, format_shipping_cost,
    get_shipping_options, quote_cart, zones::DEFAULT_ITEM_WEIGHT_KG, CartItemWithWeight, Currency,
    ShippingQuote,
};
use tracing::info;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Merges `new_items` into `cart_items`, aggregating quantities for existing
/// entries and inserting brand new ones.
///
/// Lines are matched by `id`. An incoming line that carries a weight
/// replaces the stored weight; price is taken from the latest line. If any
/// aggregated quantity would overflow, the cart is left untouched.
pub fn update_cart_with_new_items(
    cart_items: &mut Vec<CartItemWithWeight>,
    new_items: Vec<CartItemWithWeight>,
) -> Result<(), ApiError> {
    let mut merged = cart_items.clone();
    for (index, incoming) in new_items.into_iter().enumerate() {
        if let Some(existing) = merged.iter_mut().find(|i| i.id == incoming.id) {
            existing.quantity = existing
                .quantity
                .checked_add(incoming.quantity)
                .ok_or_else(|| {
                    ApiError::validation(format!("items[{index}].quantity"), "too large")
                })?;
            existing.price = incoming.price;
            if incoming.weight.is_some() {
                existing.weight = incoming.weight;
            }
        } else {
            merged.push(incoming);
        }
    }
    *cart_items = merged;
    Ok(())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x mug, 1x basket"`.
pub fn format_item_summary(items: &[CartItemWithWeight]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejects weights and prices the engine would have to clamp.
pub fn validate_items(items: &[CartItemWithWeight]) -> Result<(), ApiError> {
    for (index, item) in items.iter().enumerate() {
        if let Some(weight) = item.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ApiError::validation(
                    format!("items[{index}].weight"),
                    "must be a non-negative number",
                ));
            }
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(ApiError::validation(
                format!("items[{index}].price"),
                "must be a non-negative number",
            ));
        }
    }
    Ok(())
}

/// Display string for the amount payable on a quote
pub fn quote_display(quote: &ShippingQuote) -> String {
    format_shipping_cost(quote.total_kes(), Currency::Kes)
}

/// Picks the items to quote: a stored cart when `cart_id` is set, otherwise
/// the inline items. Supplying both is rejected.
fn items_for_quote(
    state: &AppState,
    input: &QuoteInput,
) -> Result<(Option<String>, Vec<CartItemWithWeight>), ApiError> {
    match (&input.cart_id, &input.items) {
        (Some(_), Some(_)) => Err(ApiError::validation("items", "cannot be combined with cartId")),
        (Some(cart_id), None) => state
            .cart_items(cart_id)
            .map(|items| (Some(cart_id.clone()), items))
            .ok_or_else(|| ApiError::CartNotFound(cart_id.clone())),
        (None, Some(items)) => {
            validate_items(items)?;
            Ok((None, items.clone()))
        }
        (None, None) => Err(ApiError::MissingCart),
    }
}

/// Quotes shipping for a stored cart or inline items.
pub fn build_quote(state: &AppState, input: &QuoteInput) -> Result<QuoteResponse, ApiError> {
    let (cart_id, items) = items_for_quote(state, input)?;
    let total_weight = calculate_total_weight(&items, DEFAULT_ITEM_WEIGHT_KG);
    let subtotal = calculate_subtotal(&items);
    let quote = quote_cart(&items, &input.destination);

    let free_shipping_gap = match &quote {
        ShippingQuote::Local(_) => None,
        ShippingQuote::International(_) => {
            amount_until_free_shipping(&input.destination.country_code, subtotal)
        }
    };

    Ok(QuoteResponse {
        cart_id,
        total_weight,
        subtotal,
        display: quote_display(&quote),
        quote,
        amount_until_free_shipping: free_shipping_gap,
    })
}

/// Lists the tiered shipping options for a stored cart or inline items.
pub fn build_options(state: &AppState, input: &QuoteInput) -> Result<OptionsResponse, ApiError> {
    let (_, items) = items_for_quote(state, input)?;
    let total_weight = calculate_total_weight(&items, DEFAULT_ITEM_WEIGHT_KG);
    let subtotal = calculate_subtotal(&items);
    let options = get_shipping_options(
        total_weight,
        &input.destination.country_code,
        subtotal,
        input.destination.city.as_deref(),
    );

    Ok(OptionsResponse {
        total_weight,
        subtotal,
        options,
    })
}

/// Removes the cart and returns a receipt with the final shipping quote.
pub fn checkout_cart(
    state: &AppState,
    input: CheckoutInput,
) -> Result<CheckoutResponse, ApiError> {
    let cart_id = input.cart_id.ok_or(ApiError::MissingCart)?;
    let (_, items) = state
        .carts
        .remove(&cart_id)
        .ok_or_else(|| ApiError::CartNotFound(cart_id.clone()))?;

    let summary = format_item_summary(&items);
    let subtotal = calculate_subtotal(&items);
    let shipping = quote_cart(&items, &input.destination);
    let shipping_display = quote_display(&shipping);

    info!(
        cart_id = %cart_id,
        items = %summary,
        subtotal,
        shipping = %shipping_display,
        "Cart checked out"
    );

    Ok(CheckoutResponse {
        status: "checked_out".to_string(),
        cart_id,
        summary,
        subtotal,
        shipping,
        shipping_display,
    })
}
