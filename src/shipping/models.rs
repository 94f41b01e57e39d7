//! Shipping Domain Models
//!
//! Value objects passed into and returned from the rate engine. They are
//! created fresh for every calculation and never persisted.

use super::zones::{LocalZone, ShippingZone};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Inputs
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// A cart line as seen by the shipping calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithWeight {
    /// Product identifier
    pub id: String,

    /// Unit weight in kilograms; the calculator substitutes a default when absent
    #[serde(default)]
    pub weight: Option<f64>,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Unit price in the store's base currency (USD)
    #[serde(default)]
    pub price: f64,
}

/// Where an order is being shipped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Free-form country code, matched case-insensitively
    pub country_code: String,

    /// City name, only consulted for domestic deliveries
    #[serde(default)]
    pub city: Option<String>,
}

// =============================================================================
// Outputs
// =============================================================================

/// Currencies the engine reports amounts in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Kes,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Kes => "KES",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Estimated delivery range in business days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryWindow {
    pub min_days: u32,
    pub max_days: u32,
}

/// Full cost breakdown for an international (zone-based) shipment.
///
/// Component amounts are in KES. When `is_free_shipping` is set both totals
/// are zero and `savings` holds the KES total that was waived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCalculationResult {
    pub zone: ShippingZone,
    pub base_rate: f64,
    pub weight_charge: f64,
    pub fuel_surcharge: f64,
    pub insurance: f64,
    #[serde(rename = "totalUSD")]
    pub total_usd: f64,
    #[serde(rename = "totalKES")]
    pub total_kes: f64,
    pub currency: Currency,
    pub delivery: DeliveryWindow,
    pub estimated_days: String,
    pub courier: String,
    pub is_free_shipping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

/// Flat-rate breakdown for a domestic delivery. Never free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalShippingCalculationResult {
    pub zone: LocalZone,
    pub rate: f64,
    pub currency: Currency,
    pub delivery: DeliveryWindow,
    pub estimated_days: String,
    pub courier: String,
}

/// Service level offered at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Economy,
    Standard,
    Priority,
    Local,
}

impl ServiceTier {
    pub fn label(self) -> &'static str {
        match self {
            ServiceTier::Economy => "Economy",
            ServiceTier::Standard => "Standard",
            ServiceTier::Priority => "Priority",
            ServiceTier::Local => "Local Delivery",
        }
    }
}

/// One selectable shipping option, with totals already scaled for its tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub tier: ServiceTier,
    pub name: String,
    #[serde(rename = "totalUSD")]
    pub total_usd: f64,
    #[serde(rename = "totalKES")]
    pub total_kes: f64,
    pub delivery: DeliveryWindow,
    pub estimated_days: String,
    pub courier: String,
    pub is_free_shipping: bool,
}

/// Quote for a whole cart: domestic carts get a flat local rate, everything
/// else goes through the zone calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShippingQuote {
    Local(LocalShippingCalculationResult),
    International(ShippingCalculationResult),
}

impl ShippingQuote {
    /// Amount payable in KES
    pub fn total_kes(&self) -> f64 {
        match self {
            ShippingQuote::Local(local) => local.rate,
            ShippingQuote::International(result) => result.total_kes,
        }
    }

    pub fn courier(&self) -> &str {
        match self {
            ShippingQuote::Local(local) => &local.courier,
            ShippingQuote::International(result) => &result.courier,
        }
    }

    pub fn estimated_days(&self) -> &str {
        match self {
            ShippingQuote::Local(local) => &local.estimated_days,
            ShippingQuote::International(result) => &result.estimated_days,
        }
    }
}
