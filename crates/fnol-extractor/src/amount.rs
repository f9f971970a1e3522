//! Damage estimate parsing

use fnol_domain::Decimal;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static ESTIMATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ESTIMATE\s+AMOUNT[:\s]*\$?\s*([0-9,]+\.?[0-9]*)")
        .expect("valid estimate pattern")
});

/// Parse a numeric token such as `"18,500"` or `"1,234.56"`
///
/// Thousands separators are stripped and a dangling decimal point is ignored.
/// Returns `None` for tokens that are not a plain decimal number. Numbers too
/// large for [`Decimal`] saturate to [`Decimal::MAX`].
///
/// ```
/// use fnol_extractor::parse_amount;
/// use fnol_domain::Decimal;
///
/// assert_eq!(parse_amount("18,500").map(|d| d.to_string()), Some("18500".to_string()));
/// assert_eq!(parse_amount(",,"), None);
/// assert_eq!(parse_amount(&"9".repeat(40)), Some(Decimal::MAX));
/// ```
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let digits: String = token.chars().filter(|c| *c != ',').collect();
    let digits = digits.trim_end_matches('.');
    if !is_plain_number(digits) {
        return None;
    }
    Some(Decimal::from_str(digits).unwrap_or(Decimal::MAX))
}

/// ASCII digits with at most one interior decimal point
fn is_plain_number(s: &str) -> bool {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Estimated damage from the `ESTIMATE AMOUNT` label
pub(crate) fn estimated_damage(text: &str) -> Option<Decimal> {
    let token = ESTIMATE.captures(text)?.get(1)?.as_str();
    parse_amount(token)
}
