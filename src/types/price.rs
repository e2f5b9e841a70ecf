//! Decimal dollar ⇄ integer cent conversions for the text boundary.
//!
//! The wire format quotes prices in decimal dollars while the book stores
//! integer cents. Conversions go through `rust_decimal` so that a quote like
//! `"10.25"` maps to exactly 1025 cents on every platform.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::types::CentPrice;

/// Parse a decimal dollar amount into integer cents.
///
/// Fractions finer than a cent are truncated toward zero. Returns `None`
/// when the text is not a decimal number or the result overflows a
/// [`CentPrice`].
///
/// # Example
///
/// ```
/// use matchbook::types::price::dollars_to_cents;
///
/// assert_eq!(dollars_to_cents("30"), Some(3000));
/// assert_eq!(dollars_to_cents("10.25"), Some(1025));
/// assert_eq!(dollars_to_cents("ten"), None);
/// ```
pub fn dollars_to_cents(s: &str) -> Option<CentPrice> {
    let dollars = Decimal::from_str(s.trim()).ok()?;
    let cents = dollars.checked_mul(Decimal::ONE_HUNDRED)?.trunc();
    cents.to_i32()
}

/// Render integer cents as decimal dollars with trailing zeros trimmed,
/// matching the wire format's quoting (`3000` cents prints as `30`,
/// `1025` cents as `10.25`).
pub fn cents_to_dollars(cents: CentPrice) -> String {
    Decimal::new(i64::from(cents), 2).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_to_cents() {
        assert_eq!(dollars_to_cents("30"), Some(3000));
        assert_eq!(dollars_to_cents("1075"), Some(107_500));
        assert_eq!(dollars_to_cents("10.25"), Some(1025));
        assert_eq!(dollars_to_cents("0.01"), Some(1));
        assert_eq!(dollars_to_cents(" 20 "), Some(2000));
    }

    #[test]
    fn test_dollars_to_cents_truncates_sub_cent() {
        assert_eq!(dollars_to_cents("10.999"), Some(1099));
        assert_eq!(dollars_to_cents("0.009"), Some(0));
    }

    #[test]
    fn test_dollars_to_cents_rejects_garbage() {
        assert_eq!(dollars_to_cents(""), None);
        assert_eq!(dollars_to_cents("ten"), None);
        assert_eq!(dollars_to_cents("10.2.5"), None);
        // Overflows i32 cents.
        assert_eq!(dollars_to_cents("99999999999"), None);
    }

    #[test]
    fn test_cents_to_dollars() {
        assert_eq!(cents_to_dollars(3000), "30");
        assert_eq!(cents_to_dollars(102_500), "1025");
        assert_eq!(cents_to_dollars(1025), "10.25");
        assert_eq!(cents_to_dollars(1020), "10.2");
        assert_eq!(cents_to_dollars(1), "0.01");
    }

    #[test]
    fn test_round_trip() {
        for cents in [1, 99, 100, 1025, 3000, 107_500] {
            assert_eq!(dollars_to_cents(&cents_to_dollars(cents)), Some(cents));
        }
    }
}
