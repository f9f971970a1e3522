//! Claim type classification by keyword priority

use fnol_domain::ClaimType;
use regex::Regex;
use std::sync::LazyLock;

// Checked in order; the first group found anywhere in the text wins.
static CLAIM_TYPE_RULES: LazyLock<Vec<(Regex, ClaimType)>> = LazyLock::new(|| {
    [
        (r"(?i)injur(?:y|ed|ies)", ClaimType::Injury),
        (r"(?i)collision|accident", ClaimType::Collision),
        (r"(?i)theft|stolen", ClaimType::Theft),
    ]
    .into_iter()
    .map(|(pattern, claim_type)| {
        let pattern = Regex::new(pattern).expect("valid claim type pattern");
        (pattern, claim_type)
    })
    .collect()
});

/// Classify a document by the first keyword group it contains
///
/// This is a plain substring scan, so negated mentions ("no injuries") still
/// count. Documents matching nothing are [`ClaimType::Property`].
pub fn classify_claim_type(text: &str) -> ClaimType {
    CLAIM_TYPE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, claim_type)| *claim_type)
        .unwrap_or_default()
}
