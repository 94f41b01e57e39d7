//! Shipping Rate Engine
//!
//! This module contains the stateless shipping cost engine:
//! - Zone registry (country and city classification, rate tables)
//! - Rate calculator (international, local and tiered options)
//! - Value objects for inputs and breakdowns
//! - Display formatting helpers

pub mod calculator;
pub mod format;
pub mod models;
pub mod zones;

// Re-export commonly used types and functions
pub use calculator::{
    amount_until_free_shipping, calculate_local_shipping, calculate_shipping,
    calculate_subtotal, calculate_total_weight, get_shipping_options, quote_cart,
};
pub use format::{format_delivery_estimate, format_shipping_cost};
pub use models::{
    CartItemWithWeight, Currency, DeliveryWindow, Destination, LocalShippingCalculationResult,
    ServiceTier, ShippingCalculationResult, ShippingOption, ShippingQuote,
};
pub use zones::{
    countries, is_serviceable, resolve_international_zone, resolve_local_zone, CountryMapping,
    LocalZone, ShippingZone,
};
