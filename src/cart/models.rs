//! Shopping Cart Domain Models
//!
//! Request and response bodies for the cart and shipping endpoints. Cart
//! lines are the engine's [`CartItemWithWeight`] so a stored cart can be
//! quoted directly.

use crate::shipping::{CartItemWithWeight, Destination, ShippingOption, ShippingQuote};
use serde::{Deserialize, Serialize};

// =============================================================================
// Inputs
// =============================================================================

/// Input for syncing or adding to a cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    /// List of items to add to the cart
    pub items: Vec<CartItemWithWeight>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for quoting shipping, either for a stored cart or inline items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// Stored cart to quote
    pub cart_id: Option<String>,

    /// Inline items, used when no cart id is given
    pub items: Option<Vec<CartItemWithWeight>>,

    /// Where the order is going
    #[serde(flatten)]
    pub destination: Destination,
}

/// Input for the checkout operation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    /// Optional cart identifier
    pub cart_id: Option<String>,

    /// Delivery destination for the final shipping quote
    #[serde(flatten)]
    pub destination: Destination,
}

// =============================================================================
// Responses
// =============================================================================

/// Response for cart synchronization operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    pub cart_id: String,
}

/// Shipping quote for a cart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,
    pub total_weight: f64,
    pub subtotal: f64,
    pub quote: ShippingQuote,
    /// Display string for the amount payable, e.g. `"KES 10,290"` or `"FREE"`
    pub display: String,
    /// USD still needed for free shipping, absent for domestic orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_until_free_shipping: Option<f64>,
}

/// Tiered shipping options for a cart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub total_weight: f64,
    pub subtotal: f64,
    pub options: Vec<ShippingOption>,
}

/// Receipt returned when a cart is checked out
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub cart_id: String,
    pub summary: String,
    pub subtotal: f64,
    pub shipping: ShippingQuote,
    pub shipping_display: String,
}
