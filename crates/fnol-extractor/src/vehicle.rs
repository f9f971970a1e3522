//! Asset type composition from the insured vehicle block

use fnol_domain::ASSET_TYPE_FALLBACK;
use regex::Regex;
use std::sync::LazyLock;

// MAKE and MODEL run to the next vehicle label or the end of the line.
static MAKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)MAKE[:\s]*([^\n]+?)(?:\s+MODEL|$)").expect("valid make pattern")
});

static MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)MODEL[:\s]*([^\n]+?)(?:\s+YEAR|$)").expect("valid model pattern")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)YEAR[:\s]*([0-9]{4})").expect("valid year pattern"));

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `"<year> <make> <model>"` when all three are present, else `"Vehicle"`
pub(crate) fn asset_type(text: &str) -> String {
    let make = first_capture(&MAKE, text);
    let model = first_capture(&MODEL, text);
    let year = first_capture(&YEAR, text);

    match (year, make, model) {
        (Some(year), Some(make), Some(model)) => {
            format!("{} {} {}", year, make.trim(), model.trim())
                .trim()
                .to_string()
        }
        _ => ASSET_TYPE_FALLBACK.to_string(),
    }
}
