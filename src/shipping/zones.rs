//! Zone Registry
//!
//! Static reference data mapping destinations to rate parameters. Country
//! codes resolve to one of the international zones; cities inside the home
//! country resolve to a flat-rate local zone. Every lookup is total: unknown
//! countries fall back to [`ShippingZone::ZoneB`] and unknown cities to
//! [`LocalZone::Rural`].

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Country the store ships from; deliveries here use local zones
pub const HOME_COUNTRY: &str = "KE";
/// Fixed conversion factor from the base currency (USD) to KES
pub const USD_TO_KES: f64 = 150.0;
/// Weight covered by the base rate before per-kg charges apply
pub const BASE_WEIGHT_KG: f64 = 0.5;
/// Weight assumed for cart items that carry no weight
pub const DEFAULT_ITEM_WEIGHT_KG: f64 = 0.5;
/// Fuel surcharge applied to the converted base + weight charge
pub const FUEL_SURCHARGE_RATE: f64 = 0.20;
/// Insurance as a share of the order subtotal
pub const INSURANCE_RATE: f64 = 0.01;
/// Insurance floor for international shipments, in USD
pub const INTERNATIONAL_INSURANCE_MIN_USD: f64 = 5.0;
/// Insurance floor for shipments rated in the local zone, in KES
pub const LOCAL_INSURANCE_MIN_KES: f64 = 100.0;

// =============================================================================
// International zones
// =============================================================================

/// Rate-tier bucket grouping destination countries by cost profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShippingZone {
    Local,
    ZoneA,
    ZoneB,
    ZoneC,
    ZoneD,
    ZoneE,
    ZoneF,
}

/// Per-zone rate parameters. `Local` amounts are KES, every other zone is USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRates {
    pub base_rate: f64,
    pub rate_per_kg: f64,
    pub min_days: u32,
    pub max_days: u32,
    pub courier: &'static str,
}

impl ShippingZone {
    pub const ALL: [ShippingZone; 7] = [
        ShippingZone::Local,
        ShippingZone::ZoneA,
        ShippingZone::ZoneB,
        ShippingZone::ZoneC,
        ShippingZone::ZoneD,
        ShippingZone::ZoneE,
        ShippingZone::ZoneF,
    ];

    pub fn rates(self) -> ZoneRates {
        match self {
            ShippingZone::Local => ZoneRates {
                base_rate: 300.0,
                rate_per_kg: 100.0,
                min_days: 1,
                max_days: 3,
                courier: "G4S Kenya",
            },
            ShippingZone::ZoneA => ZoneRates {
                base_rate: 15.0,
                rate_per_kg: 5.0,
                min_days: 3,
                max_days: 5,
                courier: "DHL Express",
            },
            ShippingZone::ZoneB => ZoneRates {
                base_rate: 25.0,
                rate_per_kg: 8.0,
                min_days: 5,
                max_days: 8,
                courier: "DHL Express",
            },
            ShippingZone::ZoneC => ZoneRates {
                base_rate: 30.0,
                rate_per_kg: 10.0,
                min_days: 5,
                max_days: 7,
                courier: "Aramex",
            },
            ShippingZone::ZoneD => ZoneRates {
                base_rate: 35.0,
                rate_per_kg: 12.0,
                min_days: 5,
                max_days: 10,
                courier: "DHL Express",
            },
            ShippingZone::ZoneE => ZoneRates {
                base_rate: 40.0,
                rate_per_kg: 15.0,
                min_days: 7,
                max_days: 12,
                courier: "FedEx International",
            },
            ShippingZone::ZoneF => ZoneRates {
                base_rate: 45.0,
                rate_per_kg: 18.0,
                min_days: 10,
                max_days: 15,
                courier: "FedEx International",
            },
        }
    }

    /// Order subtotal (USD) at or above which shipping is waived.
    /// The local zone has no threshold.
    pub fn free_shipping_threshold(self) -> Option<f64> {
        match self {
            ShippingZone::Local => None,
            ShippingZone::ZoneA => Some(100.0),
            ShippingZone::ZoneB => Some(150.0),
            ShippingZone::ZoneC => Some(200.0),
            ShippingZone::ZoneD => Some(300.0),
            ShippingZone::ZoneE => Some(350.0),
            ShippingZone::ZoneF => Some(400.0),
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            ShippingZone::Local => "Kenya",
            ShippingZone::ZoneA => "East Africa",
            ShippingZone::ZoneB => "Rest of Africa",
            ShippingZone::ZoneC => "Middle East",
            ShippingZone::ZoneD => "Europe",
            ShippingZone::ZoneE => "North America",
            ShippingZone::ZoneF => "Asia, Oceania & Latin America",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingZone::Local => "local",
            ShippingZone::ZoneA => "zone_a",
            ShippingZone::ZoneB => "zone_b",
            ShippingZone::ZoneC => "zone_c",
            ShippingZone::ZoneD => "zone_d",
            ShippingZone::ZoneE => "zone_e",
            ShippingZone::ZoneF => "zone_f",
        }
    }
}

impl fmt::Display for ShippingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Local zones
// =============================================================================

/// Domestic rate bucket chosen by city
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LocalZone {
    Nairobi,
    MajorCities,
    Rural,
}

/// Flat domestic rate, in KES
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalZoneRates {
    pub flat_rate: f64,
    pub min_days: u32,
    pub max_days: u32,
    pub courier: &'static str,
}

impl LocalZone {
    pub fn rates(self) -> LocalZoneRates {
        match self {
            LocalZone::Nairobi => LocalZoneRates {
                flat_rate: 250.0,
                min_days: 1,
                max_days: 2,
                courier: "Sendy Rider",
            },
            LocalZone::MajorCities => LocalZoneRates {
                flat_rate: 400.0,
                min_days: 2,
                max_days: 3,
                courier: "G4S Courier",
            },
            LocalZone::Rural => LocalZoneRates {
                flat_rate: 600.0,
                min_days: 3,
                max_days: 5,
                courier: "Posta Kenya",
            },
        }
    }
}

/// Cities (other than Nairobi) served at the major-city rate, lowercase
pub const MAJOR_CITIES: &[&str] = &[
    "mombasa", "kisumu", "nakuru", "eldoret", "thika", "malindi", "kitale", "nyeri", "machakos",
    "meru", "kakamega", "naivasha", "nanyuki", "kericho", "embu", "garissa",
];

// =============================================================================
// Country table
// =============================================================================

/// A destination country and the zone it ships under
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CountryMapping {
    pub code: &'static str,
    pub name: &'static str,
    pub zone: ShippingZone,
}

const fn country(code: &'static str, name: &'static str, zone: ShippingZone) -> CountryMapping {
    CountryMapping { code, name, zone }
}

static COUNTRIES: &[CountryMapping] = &[
    country("KE", "Kenya", ShippingZone::Local),
    // East Africa
    country("UG", "Uganda", ShippingZone::ZoneA),
    country("TZ", "Tanzania", ShippingZone::ZoneA),
    country("RW", "Rwanda", ShippingZone::ZoneA),
    country("BI", "Burundi", ShippingZone::ZoneA),
    country("SS", "South Sudan", ShippingZone::ZoneA),
    country("ET", "Ethiopia", ShippingZone::ZoneA),
    country("SO", "Somalia", ShippingZone::ZoneA),
    // Rest of Africa
    country("NG", "Nigeria", ShippingZone::ZoneB),
    country("GH", "Ghana", ShippingZone::ZoneB),
    country("ZA", "South Africa", ShippingZone::ZoneB),
    country("EG", "Egypt", ShippingZone::ZoneB),
    country("MA", "Morocco", ShippingZone::ZoneB),
    country("SN", "Senegal", ShippingZone::ZoneB),
    country("ZM", "Zambia", ShippingZone::ZoneB),
    country("ZW", "Zimbabwe", ShippingZone::ZoneB),
    country("BW", "Botswana", ShippingZone::ZoneB),
    country("MW", "Malawi", ShippingZone::ZoneB),
    // Middle East
    country("AE", "United Arab Emirates", ShippingZone::ZoneC),
    country("SA", "Saudi Arabia", ShippingZone::ZoneC),
    country("QA", "Qatar", ShippingZone::ZoneC),
    country("OM", "Oman", ShippingZone::ZoneC),
    country("KW", "Kuwait", ShippingZone::ZoneC),
    country("BH", "Bahrain", ShippingZone::ZoneC),
    country("IL", "Israel", ShippingZone::ZoneC),
    country("TR", "Turkey", ShippingZone::ZoneC),
    // Europe
    country("GB", "United Kingdom", ShippingZone::ZoneD),
    country("DE", "Germany", ShippingZone::ZoneD),
    country("FR", "France", ShippingZone::ZoneD),
    country("IT", "Italy", ShippingZone::ZoneD),
    country("ES", "Spain", ShippingZone::ZoneD),
    country("NL", "Netherlands", ShippingZone::ZoneD),
    country("BE", "Belgium", ShippingZone::ZoneD),
    country("SE", "Sweden", ShippingZone::ZoneD),
    country("NO", "Norway", ShippingZone::ZoneD),
    country("DK", "Denmark", ShippingZone::ZoneD),
    country("CH", "Switzerland", ShippingZone::ZoneD),
    country("IE", "Ireland", ShippingZone::ZoneD),
    country("PL", "Poland", ShippingZone::ZoneD),
    country("PT", "Portugal", ShippingZone::ZoneD),
    // North America
    country("US", "United States", ShippingZone::ZoneE),
    country("CA", "Canada", ShippingZone::ZoneE),
    country("MX", "Mexico", ShippingZone::ZoneE),
    // Asia, Oceania & Latin America
    country("CN", "China", ShippingZone::ZoneF),
    country("JP", "Japan", ShippingZone::ZoneF),
    country("IN", "India", ShippingZone::ZoneF),
    country("KR", "South Korea", ShippingZone::ZoneF),
    country("SG", "Singapore", ShippingZone::ZoneF),
    country("MY", "Malaysia", ShippingZone::ZoneF),
    country("AU", "Australia", ShippingZone::ZoneF),
    country("NZ", "New Zealand", ShippingZone::ZoneF),
    country("BR", "Brazil", ShippingZone::ZoneF),
    country("AR", "Argentina", ShippingZone::ZoneF),
];

// =============================================================================
// Lookups
// =============================================================================

/// All countries with an explicit zone assignment
pub fn countries() -> &'static [CountryMapping] {
    COUNTRIES
}

/// Looks up the explicit mapping for a country code, if any
pub fn find_country(country_code: &str) -> Option<&'static CountryMapping> {
    let code = country_code.trim().to_uppercase();
    COUNTRIES.iter().find(|c| c.code == code)
}

/// Resolves a country code to its international zone.
///
/// Codes without an explicit mapping ship under `ZoneB`, so this never fails.
pub fn resolve_international_zone(country_code: &str) -> ShippingZone {
    find_country(country_code)
        .map(|c| c.zone)
        .unwrap_or(ShippingZone::ZoneB)
}

/// Classifies a domestic city. Exact match only: "Nairobi West" is rural.
pub fn resolve_local_zone(city: &str) -> LocalZone {
    let city = city.trim().to_lowercase();
    if city == "nairobi" {
        LocalZone::Nairobi
    } else if MAJOR_CITIES.contains(&city.as_str()) {
        LocalZone::MajorCities
    } else {
        LocalZone::Rural
    }
}

/// Every destination is currently serviceable through the `ZoneB` fallback.
pub fn is_serviceable(_country_code: &str) -> bool {
    true
}

pub fn is_home_country(country_code: &str) -> bool {
    country_code.trim().eq_ignore_ascii_case(HOME_COUNTRY)
}
