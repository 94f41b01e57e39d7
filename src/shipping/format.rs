//! Display helpers for shipping amounts and delivery estimates.

use super::models::{Currency, DeliveryWindow};

/// Formats a shipping cost for display.
///
/// Zero renders as `"FREE"`. USD keeps two decimals (`"$12.34"`), KES is
/// shown in whole units with thousands separators (`"KES 1,234"`).
pub fn format_shipping_cost(amount: f64, currency: Currency) -> String {
    if amount == 0.0 {
        return "FREE".to_string();
    }

    match currency {
        Currency::Usd => format!("${:.2}", amount),
        Currency::Kes => format!("KES {}", group_thousands(amount.round() as i64)),
    }
}

/// `"5-7 business days"`, collapsing equal bounds to a single figure.
pub fn format_delivery_estimate(window: DeliveryWindow) -> String {
    let unit = if window.max_days == 1 { "day" } else { "days" };
    if window.min_days == window.max_days {
        format!("{} business {}", window.max_days, unit)
    } else {
        format!("{}-{} business {}", window.min_days, window.max_days, unit)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_free() {
        assert_eq!(format_shipping_cost(0.0, Currency::Usd), "FREE");
        assert_eq!(format_shipping_cost(0.0, Currency::Kes), "FREE");
    }

    #[test]
    fn test_usd_two_decimals() {
        assert_eq!(format_shipping_cost(12.34, Currency::Usd), "$12.34");
        assert_eq!(format_shipping_cost(68.6, Currency::Usd), "$68.60");
    }

    #[test]
    fn test_kes_grouping() {
        assert_eq!(format_shipping_cost(1234.0, Currency::Kes), "KES 1,234");
        assert_eq!(format_shipping_cost(250.0, Currency::Kes), "KES 250");
        assert_eq!(format_shipping_cost(10290.0, Currency::Kes), "KES 10,290");
        assert_eq!(format_shipping_cost(1234567.4, Currency::Kes), "KES 1,234,567");
    }

    #[test]
    fn test_delivery_estimate() {
        let window = DeliveryWindow { min_days: 5, max_days: 7 };
        assert_eq!(format_delivery_estimate(window), "5-7 business days");

        let next_day = DeliveryWindow { min_days: 1, max_days: 1 };
        assert_eq!(format_delivery_estimate(next_day), "1 business day");
    }
}
