//! Money amounts: display formatting and JSON encoding of damage estimates

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

/// Fraction digits kept when an amount is rendered for people
const MAX_DISPLAY_FRACTION_DIGITS: u32 = 3;

/// Render an amount with thousands separators
///
/// At most three fraction digits are shown (rounded half away from zero) and
/// trailing fractional zeros are dropped.
///
/// # Examples
///
/// ```
/// use fnol_domain::{format_amount, Decimal};
///
/// assert_eq!(format_amount(&Decimal::new(18500, 0)), "18,500");
/// assert_eq!(format_amount(&Decimal::new(2499999, 2)), "24,999.99");
/// ```
pub fn format_amount(amount: &Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_DISPLAY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Serialize an optional amount as a JSON number
///
/// Whole amounts are written as integers, anything else as a float.
pub(crate) fn serialize_optional<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let Some(amount) = value else {
        return serializer.serialize_none();
    };

    let amount = amount.normalize();
    if amount.scale() == 0 {
        if let Some(whole) = amount.to_i64() {
            return serializer.serialize_some(&whole);
        }
    }
    match amount.to_f64() {
        Some(float) => serializer.serialize_some(&float),
        None => serializer.serialize_some(&amount.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(&dec("0")), "0");
        assert_eq!(format_amount(&dec("999")), "999");
        assert_eq!(format_amount(&dec("1000")), "1,000");
        assert_eq!(format_amount(&dec("25000")), "25,000");
        assert_eq!(format_amount(&dec("1234567.5")), "1,234,567.5");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(format_amount(&dec("18500.00")), "18,500");
        assert_eq!(format_amount(&dec("12.50")), "12.5");
    }

    #[test]
    fn test_rounds_to_three_places() {
        assert_eq!(format_amount(&dec("1.23456")), "1.235");
        assert_eq!(format_amount(&dec("0.0005")), "0.001");
        assert_eq!(format_amount(&dec("0.0004")), "0");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_amount(&dec("-1500")), "-1,500");
    }

    fn any_decimal() -> impl Strategy<Value = Decimal> {
        (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
    }

    proptest! {
        /// Property: without separators the output reads back as the amount rounded to 3 places
        #[test]
        fn test_format_reads_back_rounded(amount in any_decimal()) {
            let formatted = format_amount(&amount);
            let parsed = Decimal::from_str(&formatted.replace(',', "")).unwrap();
            let expected = amount.round_dp_with_strategy(
                MAX_DISPLAY_FRACTION_DIGITS,
                RoundingStrategy::MidpointAwayFromZero,
            );
            prop_assert_eq!(parsed, expected, "formatted as {}", formatted);
        }

        /// Property: the whole part is grouped in threes from the right
        #[test]
        fn test_format_groups_in_threes(amount in any_decimal()) {
            let formatted = format_amount(&amount);
            let whole = formatted
                .trim_start_matches('-')
                .split('.')
                .next()
                .unwrap_or_default();
            let groups: Vec<&str> = whole.split(',').collect();

            prop_assert!((1..=3).contains(&groups[0].len()), "formatted as {}", formatted);
            prop_assert!(groups[1..].iter().all(|g| g.len() == 3), "formatted as {}", formatted);
            prop_assert!(
                groups.iter().all(|g| g.bytes().all(|b| b.is_ascii_digit())),
                "formatted as {}",
                formatted
            );
            prop_assert!(groups.len() == 1 || !groups[0].starts_with('0'), "formatted as {}", formatted);
        }
    }
}
