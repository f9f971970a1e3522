//! Claim type module - keyword-derived category of a loss

use serde::Serialize;
use std::fmt;

/// Category of a reported loss
///
/// Every processed document is assigned exactly one claim type; when no keyword
/// matches, the claim falls back to [`ClaimType::Property`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// Bodily injury mentioned anywhere in the document
    Injury,

    /// Vehicle collision or accident
    Collision,

    /// Theft of the insured asset
    Theft,

    /// Anything else
    #[default]
    Property,
}

impl ClaimType {
    /// Get the claim type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "injury",
            ClaimType::Collision => "collision",
            ClaimType::Theft => "theft",
            ClaimType::Property => "property",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_form() {
        for claim_type in [
            ClaimType::Injury,
            ClaimType::Collision,
            ClaimType::Theft,
            ClaimType::Property,
        ] {
            let json = serde_json::to_string(&claim_type).unwrap();
            assert_eq!(json, format!("\"{}\"", claim_type));
        }
    }

    #[test]
    fn test_default_is_property() {
        assert_eq!(ClaimType::default(), ClaimType::Property);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ClaimType::Collision).unwrap();
        assert_eq!(json, "\"collision\"");
    }
}
