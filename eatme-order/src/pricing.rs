//! Price label parsing and order totals.
//!
//! Prices are whole amounts in the smallest currency unit, so no rounding is
//! ever involved.

use crate::selection::Quantity;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^0-9]").ok());

/// Extract the numeric value of a displayed price label such as `GH₵ 25`.
///
/// Every non-digit character is stripped. Returns `None` when the label holds
/// no digits at all or when the digits do not fit a `u32`.
#[must_use]
pub fn parse_price(text: &str) -> Option<u32> {
    let digits = NON_DIGITS.as_ref().map_or_else(
        || text.chars().filter(char::is_ascii_digit).collect::<String>(),
        |re| re.replace_all(text, "").into_owned(),
    );
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Like [`parse_price`], but a label without a usable number counts as free.
#[must_use]
pub fn parse_price_or_zero(text: &str) -> u32 {
    parse_price(text).unwrap_or(0)
}

/// Total for a selection: `(unit price + sum of surcharges) * quantity`.
#[must_use]
pub fn compute_total<I>(unit_price: u32, surcharges: I, quantity: Quantity) -> u64
where
    I: IntoIterator<Item = u32>,
{
    let extras: u64 = surcharges.into_iter().map(u64::from).sum();
    (u64::from(unit_price) + extras) * u64::from(quantity.get())
}

/// Render an amount with its currency label, e.g. `GH₵ 80`.
#[must_use]
pub fn format_price(currency: &str, amount: u64) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{currency} {amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_strips_currency_and_separators() {
        assert_eq!(parse_price("GH₵ 25"), Some(25));
        assert_eq!(parse_price("GH₵ 1,250"), Some(1250));
        assert_eq!(parse_price("  40 cedis "), Some(40));
    }

    #[test]
    fn parse_price_without_digits_is_none() {
        assert_eq!(parse_price("Market price"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price_or_zero("Ask the chef"), 0);
    }

    #[test]
    fn parse_price_overflow_falls_back() {
        assert_eq!(parse_price("99999999999999999999"), None);
        assert_eq!(parse_price_or_zero("99999999999999999999"), 0);
    }

    #[test]
    fn total_adds_surcharges_before_multiplying() {
        let total = compute_total(25, [5, 10], Quantity::clamped(2));
        assert_eq!(total, 80);
    }

    #[test]
    fn total_without_add_ons_is_unit_price_times_quantity() {
        assert_eq!(compute_total(40, [], Quantity::MIN), 40);
        assert_eq!(compute_total(40, [], Quantity::MAX), 400);
    }

    #[test]
    fn total_is_monotonic_in_quantity_and_surcharges() {
        for unit in [0_u32, 1, 25, 180] {
            for extra in [0_u32, 5, 15] {
                let mut previous = 0;
                for qty in 1..=10 {
                    let total = compute_total(unit, [extra], Quantity::clamped(qty));
                    assert!(total >= previous);
                    assert!(total >= compute_total(unit, [], Quantity::clamped(qty)));
                    previous = total;
                }
            }
        }
    }

    #[test]
    fn format_price_prefixes_currency() {
        assert_eq!(format_price("GH₵", 80), "GH₵ 80");
        assert_eq!(format_price("", 80), "80");
    }
}
