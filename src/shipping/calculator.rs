//! Rate Calculator
//!
//! Pure functions turning a package weight, a destination and an order
//! subtotal into cost breakdowns. Nothing here allocates shared state or
//! fails: bad numbers are clamped and unknown destinations use fallback zones.

use super::format::format_delivery_estimate;
use super::models::{
    CartItemWithWeight, Currency, DeliveryWindow, Destination, LocalShippingCalculationResult,
    ServiceTier, ShippingCalculationResult, ShippingOption, ShippingQuote,
};
use super::zones::{
    is_home_country, resolve_international_zone, resolve_local_zone, ShippingZone,
    BASE_WEIGHT_KG, DEFAULT_ITEM_WEIGHT_KG, FUEL_SURCHARGE_RATE, INSURANCE_RATE,
    INTERNATIONAL_INSURANCE_MIN_USD, LOCAL_INSURANCE_MIN_KES, USD_TO_KES,
};
use tracing::{debug, warn};

const ECONOMY_MULTIPLIER: f64 = 0.8;
const PRIORITY_MULTIPLIER: f64 = 1.5;

// =============================================================================
// Cart aggregation
// =============================================================================

/// Sums `(weight or default) * quantity` over the cart.
///
/// The default applies per unit, so two weightless items count as
/// `2 * default_weight`.
pub fn calculate_total_weight(items: &[CartItemWithWeight], default_weight: f64) -> f64 {
    items
        .iter()
        .map(|item| item.weight.unwrap_or(default_weight) * f64::from(item.quantity))
        .sum()
}

/// Order subtotal in the base currency
pub fn calculate_subtotal(items: &[CartItemWithWeight]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

// =============================================================================
// International calculation
// =============================================================================

/// Computes the standard-tier cost breakdown for an international shipment.
///
/// The first 0.5 kg is covered by the base rate. Base and weight charges are
/// converted to KES (except for the `local` zone, already in KES) before the
/// fuel surcharge is taken, and insurance is added last.
pub fn calculate_shipping(
    weight_kg: f64,
    country_code: &str,
    subtotal: f64,
) -> ShippingCalculationResult {
    let weight_kg = non_negative("weight", weight_kg);
    let subtotal = non_negative("subtotal", subtotal);

    let zone = resolve_international_zone(country_code);
    let rates = zone.rates();
    let is_free_shipping = zone
        .free_shipping_threshold()
        .is_some_and(|threshold| subtotal >= threshold);

    let additional_weight = (weight_kg - BASE_WEIGHT_KG).max(0.0);
    let weight_charge = rates.rate_per_kg * additional_weight;
    let shipping_cost = rates.base_rate + weight_charge;

    let conversion = if zone == ShippingZone::Local {
        1.0
    } else {
        USD_TO_KES
    };
    let converted = shipping_cost * conversion;
    let fuel_surcharge = converted * FUEL_SURCHARGE_RATE;

    let insurance_floor = if zone == ShippingZone::Local {
        LOCAL_INSURANCE_MIN_KES
    } else {
        INTERNATIONAL_INSURANCE_MIN_USD * USD_TO_KES
    };
    let insurance = (subtotal * INSURANCE_RATE).max(insurance_floor);

    let total = converted + fuel_surcharge + insurance;
    let total_kes = total.round();
    let total_usd = round_cents(total / USD_TO_KES);

    let delivery = DeliveryWindow {
        min_days: rates.min_days,
        max_days: rates.max_days,
    };

    debug!(
        zone = %zone,
        weight_kg,
        subtotal,
        total_kes,
        is_free_shipping,
        "Calculated shipping"
    );

    let (total_usd, total_kes, savings) = if is_free_shipping {
        (0.0, 0.0, Some(total_kes))
    } else {
        (total_usd, total_kes, None)
    };

    ShippingCalculationResult {
        zone,
        base_rate: rates.base_rate * conversion,
        weight_charge: weight_charge * conversion,
        fuel_surcharge,
        insurance,
        total_usd,
        total_kes,
        currency: Currency::Kes,
        delivery,
        estimated_days: format_delivery_estimate(delivery),
        courier: rates.courier.to_string(),
        is_free_shipping,
        savings,
    }
}

// =============================================================================
// Local calculation
// =============================================================================

/// Flat domestic rate for a city. No weight dependency and never free.
pub fn calculate_local_shipping(city: &str) -> LocalShippingCalculationResult {
    let zone = resolve_local_zone(city);
    let rates = zone.rates();
    let delivery = DeliveryWindow {
        min_days: rates.min_days,
        max_days: rates.max_days,
    };

    LocalShippingCalculationResult {
        zone,
        rate: rates.flat_rate,
        currency: Currency::Kes,
        delivery,
        estimated_days: format_delivery_estimate(delivery),
        courier: rates.courier.to_string(),
    }
}

// =============================================================================
// Service tiers
// =============================================================================

/// Lists the selectable shipping options for a destination.
///
/// International destinations get Economy, Standard and Priority, derived from
/// the standard calculation. The local zone only offers its flat rate, using
/// `city` (or the rural rate when no city is known).
pub fn get_shipping_options(
    weight_kg: f64,
    country_code: &str,
    subtotal: f64,
    city: Option<&str>,
) -> Vec<ShippingOption> {
    if resolve_international_zone(country_code) == ShippingZone::Local {
        let local = calculate_local_shipping(city.unwrap_or_default());
        return vec![ShippingOption {
            tier: ServiceTier::Local,
            name: ServiceTier::Local.label().to_string(),
            total_usd: round_cents(local.rate / USD_TO_KES),
            total_kes: local.rate,
            delivery: local.delivery,
            estimated_days: local.estimated_days,
            courier: local.courier,
            is_free_shipping: false,
        }];
    }

    let standard = calculate_shipping(weight_kg, country_code, subtotal);
    let DeliveryWindow { min_days, max_days } = standard.delivery;

    let economy = scaled_option(
        &standard,
        ServiceTier::Economy,
        ECONOMY_MULTIPLIER,
        DeliveryWindow {
            min_days: max_days + 3,
            max_days: max_days + 7,
        },
    );
    let priority = scaled_option(
        &standard,
        ServiceTier::Priority,
        PRIORITY_MULTIPLIER,
        DeliveryWindow {
            min_days: min_days.saturating_sub(1).max(1),
            max_days: max_days.saturating_sub(2).max(2),
        },
    );
    let standard = scaled_option(&standard, ServiceTier::Standard, 1.0, standard.delivery);

    vec![economy, standard, priority]
}

fn scaled_option(
    standard: &ShippingCalculationResult,
    tier: ServiceTier,
    multiplier: f64,
    delivery: DeliveryWindow,
) -> ShippingOption {
    ShippingOption {
        tier,
        name: tier.label().to_string(),
        total_usd: round_cents(standard.total_usd * multiplier),
        total_kes: (standard.total_kes * multiplier).round(),
        delivery,
        estimated_days: format_delivery_estimate(delivery),
        courier: standard.courier.clone(),
        is_free_shipping: standard.is_free_shipping,
    }
}

// =============================================================================
// Cart-level helpers
// =============================================================================

/// Quotes a whole cart for a destination.
///
/// Home-country destinations use the flat local rate for the city; all
/// others use the weight-based calculation with the cart's total weight and
/// subtotal.
pub fn quote_cart(items: &[CartItemWithWeight], destination: &Destination) -> ShippingQuote {
    if is_home_country(&destination.country_code) {
        let city = destination.city.as_deref().unwrap_or_default();
        return ShippingQuote::Local(calculate_local_shipping(city));
    }

    let weight = calculate_total_weight(items, DEFAULT_ITEM_WEIGHT_KG);
    let subtotal = calculate_subtotal(items);
    ShippingQuote::International(calculate_shipping(
        weight,
        &destination.country_code,
        subtotal,
    ))
}

/// How much more (USD) the order needs for free shipping to the destination.
///
/// `None` when the destination zone never ships free; `Some(0.0)` once the
/// threshold is reached.
pub fn amount_until_free_shipping(country_code: &str, subtotal: f64) -> Option<f64> {
    let subtotal = non_negative("subtotal", subtotal);
    resolve_international_zone(country_code)
        .free_shipping_threshold()
        .map(|threshold| round_cents((threshold - subtotal).max(0.0)))
}

// =============================================================================
// Numeric helpers
// =============================================================================

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Negative and non-finite inputs are treated as zero.
fn non_negative(field: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field, value, "Clamping invalid shipping input to zero");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipping::zones::LocalZone;

    fn item(id: &str, weight: Option<f64>, quantity: u32, price: f64) -> CartItemWithWeight {
        CartItemWithWeight {
            id: id.to_string(),
            weight,
            quantity,
            price,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_base_weight_has_no_weight_charge() {
        let result = calculate_shipping(0.5, "US", 0.0);
        assert_eq!(result.zone, ShippingZone::ZoneE);
        assert_eq!(result.weight_charge, 0.0);
        assert!(approx(result.base_rate, 40.0 * USD_TO_KES));
        // 6000 + 20% fuel + 750 insurance floor
        assert_eq!(result.total_kes, 7950.0);
        assert_eq!(result.total_usd, 53.0);
    }

    #[test]
    fn test_weight_charge_covers_only_overage() {
        let result = calculate_shipping(1.5, "US", 0.0);
        assert!(approx(result.weight_charge, 15.0 * 1.0 * USD_TO_KES));
        assert_eq!(result.total_kes, 10650.0);
        assert_eq!(result.total_usd, 71.0);
    }

    #[test]
    fn test_light_packages_pay_base_rate() {
        let light = calculate_shipping(0.1, "US", 0.0);
        let base = calculate_shipping(0.5, "US", 0.0);
        assert_eq!(light.total_kes, base.total_kes);
    }

    #[test]
    fn test_end_to_end_germany() {
        let result = calculate_shipping(2.0, "DE", 50.0);
        assert_eq!(result.zone, ShippingZone::ZoneD);
        assert!(!result.is_free_shipping);
        assert_eq!(result.savings, None);
        // (35 + 12 * 1.5) * 150 = 7950
        assert!(approx(result.base_rate + result.weight_charge, 7950.0));
        assert!(approx(result.fuel_surcharge, 1590.0));
        assert!(approx(result.insurance, 750.0));
        assert_eq!(result.total_kes, 10290.0);
        assert_eq!(result.total_usd, 68.6);
        assert_eq!(result.courier, "DHL Express");
        assert_eq!(result.estimated_days, "5-10 business days");
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let result = calculate_shipping(1.0, "DE", 300.0);
        assert!(result.is_free_shipping);
        assert_eq!(result.total_kes, 0.0);
        assert_eq!(result.total_usd, 0.0);
        // (35 + 6) * 150 * 1.2 + 750
        assert_eq!(result.savings, Some(8130.0));
    }

    #[test]
    fn test_just_below_threshold_is_charged() {
        let result = calculate_shipping(1.0, "DE", 299.99);
        assert!(!result.is_free_shipping);
        assert!(result.total_kes > 0.0);
    }

    #[test]
    fn test_insurance_above_floor() {
        // 1% of 100_000 = 1000 > 750 floor; zone_b threshold is 150 so it is free,
        // the waived amount still carries the larger insurance
        let result = calculate_shipping(0.5, "XX", 100_000.0);
        assert!(approx(result.insurance, 1000.0));
        assert_eq!(result.savings, Some(4500.0 + 1000.0));
    }

    #[test]
    fn test_local_zone_is_not_converted_and_never_free() {
        let result = calculate_shipping(1.5, "KE", 1_000_000.0);
        assert_eq!(result.zone, ShippingZone::Local);
        assert!(!result.is_free_shipping);
        assert!(approx(result.base_rate, 300.0));
        assert!(approx(result.weight_charge, 100.0));
        // (400 * 1.2) + max(10_000, 100)
        assert_eq!(result.total_kes, 10480.0);
    }

    #[test]
    fn test_unknown_country_uses_zone_b() {
        let result = calculate_shipping(0.5, "Atlantis", 0.0);
        assert_eq!(result.zone, ShippingZone::ZoneB);
    }

    #[test]
    fn test_invalid_numbers_are_clamped() {
        let clamped = calculate_shipping(-3.0, "US", -10.0);
        let zero = calculate_shipping(0.0, "US", 0.0);
        assert_eq!(clamped, zero);

        let nan = calculate_shipping(f64::NAN, "US", f64::INFINITY);
        assert_eq!(nan, zero);
    }

    #[test]
    fn test_local_calculation_is_flat() {
        let nairobi = calculate_local_shipping("Nairobi");
        assert_eq!(nairobi.zone, LocalZone::Nairobi);
        assert_eq!(nairobi.rate, 250.0);
        assert_eq!(nairobi.currency, Currency::Kes);

        let rural = calculate_local_shipping("Nairobi West");
        assert_eq!(rural.zone, LocalZone::Rural);
        assert_eq!(rural.rate, 600.0);
        assert_eq!(rural.estimated_days, "3-5 business days");
    }

    #[test]
    fn test_options_tier_ordering() {
        for code in ["UG", "NG", "AE", "DE", "US", "JP", "XX"] {
            let options = get_shipping_options(2.0, code, 20.0, None);
            assert_eq!(options.len(), 3, "{code}");
            let (economy, standard, priority) = (&options[0], &options[1], &options[2]);
            assert_eq!(economy.tier, ServiceTier::Economy);
            assert_eq!(standard.tier, ServiceTier::Standard);
            assert_eq!(priority.tier, ServiceTier::Priority);
            assert!(economy.total_kes <= standard.total_kes);
            assert!(standard.total_kes <= priority.total_kes);
            assert!(economy.total_usd <= standard.total_usd);
            assert!(standard.total_usd <= priority.total_usd);
        }
    }

    #[test]
    fn test_options_multipliers_and_windows() {
        let options = get_shipping_options(2.0, "DE", 50.0, None);
        let standard = calculate_shipping(2.0, "DE", 50.0);

        assert_eq!(options[1].total_kes, standard.total_kes);
        assert_eq!(options[0].total_kes, (standard.total_kes * 0.8).round());
        assert_eq!(options[2].total_kes, (standard.total_kes * 1.5).round());

        // zone_d is 5-10 days
        assert_eq!(options[0].delivery, DeliveryWindow { min_days: 13, max_days: 17 });
        assert_eq!(options[2].delivery, DeliveryWindow { min_days: 4, max_days: 8 });
        assert_eq!(options[0].name, "Economy");
    }

    #[test]
    fn test_local_options_single_flat_rate() {
        let options = get_shipping_options(10.0, "KE", 5000.0, Some("Mombasa"));
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].tier, ServiceTier::Local);
        assert_eq!(options[0].total_kes, 400.0);
        assert!(!options[0].is_free_shipping);

        let no_city = get_shipping_options(10.0, "ke", 5000.0, None);
        assert_eq!(no_city[0].total_kes, 600.0);
    }

    #[test]
    fn test_total_weight_default_per_unit() {
        let items = vec![item("a", None, 2, 10.0)];
        assert_eq!(calculate_total_weight(&items, 0.5), 1.0);

        let mixed = vec![item("a", Some(1.25), 2, 10.0), item("b", None, 3, 5.0)];
        assert_eq!(calculate_total_weight(&mixed, DEFAULT_ITEM_WEIGHT_KG), 4.0);
        assert_eq!(calculate_subtotal(&mixed), 35.0);
    }

    #[test]
    fn test_quote_cart_routes_by_destination() {
        let items = vec![item("mug", Some(1.0), 2, 25.0)];

        let home = Destination {
            country_code: "KE".into(),
            city: Some("Kisumu".into()),
        };
        match quote_cart(&items, &home) {
            ShippingQuote::Local(local) => assert_eq!(local.zone, LocalZone::MajorCities),
            other => panic!("expected local quote, got {other:?}"),
        }

        let abroad = Destination {
            country_code: "DE".into(),
            city: Some("Berlin".into()),
        };
        let quote = quote_cart(&items, &abroad);
        assert_eq!(quote, ShippingQuote::International(calculate_shipping(2.0, "DE", 50.0)));
        assert_eq!(quote.total_kes(), 10290.0);
    }

    #[test]
    fn test_amount_until_free_shipping() {
        assert_eq!(amount_until_free_shipping("DE", 250.0), Some(50.0));
        assert_eq!(amount_until_free_shipping("DE", 400.0), Some(0.0));
        assert_eq!(amount_until_free_shipping("KE", 10.0), None);
    }
}
