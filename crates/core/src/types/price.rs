//! Price formatting helpers.
//!
//! Prices are plain `Decimal` values in the store's single currency.
//! Multi-currency support would wrap these in a `Price { amount, currency }`
//! type; the catalog serves one currency today so the wrapper is not needed.

use rust_decimal::Decimal;

/// Format a decimal amount as a display price (e.g., "$19.99").
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::format_usd;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_usd(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_usd(Decimal::new(1399, 1)), "$139.90");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
