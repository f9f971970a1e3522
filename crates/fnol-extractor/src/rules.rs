//! Rule table for the free-text fields
//!
//! Every rule pairs a label pattern with a post-processor. Rules are independent
//! of each other and only ever look at the first match of their pattern.

use fnol_domain::FieldRecord;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Text field of a [`FieldRecord`] filled by a pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// `POLICY NUMBER`
    PolicyNumber,
    /// `NAME OF INSURED`
    PolicyholderName,
    /// `DATE OF LOSS` date token
    IncidentDate,
    /// `DATE OF LOSS` time token
    IncidentTime,
    /// `LOCATION OF LOSS` / `STREET`
    Location,
    /// `DESCRIPTION OF ACCIDENT`
    Description,
    /// `DRIVER'S NAME AND ADDRESS`
    Claimant,
    /// `PRIMARY PHONE #`
    ContactPhone,
    /// `PRIMARY E-MAIL ADDRESS`
    ContactEmail,
    /// `V.I.N.`
    AssetId,
}

impl TextField {
    /// Record field name as it appears in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            TextField::PolicyNumber => "policyNumber",
            TextField::PolicyholderName => "policyholderName",
            TextField::IncidentDate => "incidentDate",
            TextField::IncidentTime => "incidentTime",
            TextField::Location => "location",
            TextField::Description => "description",
            TextField::Claimant => "claimant",
            TextField::ContactPhone => "contactPhone",
            TextField::ContactEmail => "contactEmail",
            TextField::AssetId => "assetId",
        }
    }

    /// The slot this field occupies in a record
    pub(crate) fn slot<'r>(&self, record: &'r mut FieldRecord) -> &'r mut Option<String> {
        match self {
            TextField::PolicyNumber => &mut record.policy_number,
            TextField::PolicyholderName => &mut record.policyholder_name,
            TextField::IncidentDate => &mut record.incident_date,
            TextField::IncidentTime => &mut record.incident_time,
            TextField::Location => &mut record.location,
            TextField::Description => &mut record.description,
            TextField::Claimant => &mut record.claimant,
            TextField::ContactPhone => &mut record.contact_phone,
            TextField::ContactEmail => &mut record.contact_email,
            TextField::AssetId => &mut record.asset_id,
        }
    }
}

/// Turns the first match of a rule into a field value
type PostProcessor = fn(&str, &Captures<'_>) -> Option<String>;

/// One extraction rule: label pattern, capture, post-processor
pub struct FieldRule {
    field: TextField,
    pattern: Regex,
    post: PostProcessor,
}

impl FieldRule {
    fn new(field: TextField, pattern: &str, post: PostProcessor) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", field.name(), e));
        Self { field, pattern, post }
    }

    /// Field this rule fills
    pub fn field(&self) -> TextField {
        self.field
    }

    /// Apply the rule to a document
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        (self.post)(text, &caps)
    }

    /// The full rule table, in record order
    pub fn all() -> &'static [FieldRule] {
        &TEXT_RULES
    }

    /// The rule for one field
    pub fn for_field(field: TextField) -> &'static FieldRule {
        TEXT_RULES
            .iter()
            .find(|rule| rule.field == field)
            .unwrap_or_else(|| panic!("no rule registered for {}", field.name()))
    }
}

static TEXT_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            TextField::PolicyNumber,
            r"(?i)POLICY\s*NUMBER[:\s]*((?-i:[A-Za-z0-9-]+))",
            trimmed,
        ),
        FieldRule::new(
            TextField::PolicyholderName,
            r"(?i)NAME\s+OF\s+INSURED[:\s]*(?:\(First,\s*Middle,\s*Last\)[:\s]*)?([^\n]+)",
            trimmed,
        ),
        FieldRule::new(
            TextField::IncidentDate,
            r"(?i)DATE\s+OF\s+LOSS[:\s]*(?:AND\s+TIME[:\s]*)?([0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4})",
            trimmed,
        ),
        FieldRule::new(
            TextField::IncidentTime,
            r"(?i)DATE\s+OF\s+LOSS.*?([0-9]{1,2}:[0-9]{2})\s*(AM|PM)",
            time_with_meridiem,
        ),
        FieldRule::new(
            TextField::Location,
            r"(?i)LOCATION\s+OF\s+LOSS[:\s]*STREET[:\s]*([^\n]+)",
            trimmed,
        ),
        FieldRule::new(
            TextField::Description,
            r"(?i)DESCRIPTION\s+OF\s+ACCIDENT[:\s]*([^\n]+)",
            description_block,
        ),
        FieldRule::new(
            TextField::Claimant,
            r"(?i)DRIVER'S\s+NAME\s+AND\s+ADDRESS[:\s]*([^\n]+)",
            trimmed,
        ),
        FieldRule::new(
            TextField::ContactPhone,
            r"(?i)PRIMARY\s+PHONE\s*#[:\s]*(\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4})",
            trimmed,
        ),
        FieldRule::new(
            TextField::ContactEmail,
            r"(?i)PRIMARY\s+E-MAIL\s+ADDRESS[:\s]*([^\s]+@[^\s]+)",
            trimmed,
        ),
        // A run longer than 17 characters is not a VIN. Token classes are
        // ASCII only; case folding would admit U+212A and U+017F.
        FieldRule::new(
            TextField::AssetId,
            r"(?i)V\.I\.N\.[:\s]*((?-i:[A-Za-z0-9]{17}))(?-i:[^A-Za-z0-9]|$)",
            trimmed,
        ),
    ]
});

/// First capture group, trimmed
fn trimmed(_text: &str, caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

/// `"<H:MM> <AM|PM>"` from the two capture groups
fn time_with_meridiem(_text: &str, caps: &Captures<'_>) -> Option<String> {
    let time = caps.get(1)?.as_str();
    let meridiem = caps.get(2)?.as_str();
    Some(format!("{} {}", time, meridiem))
}

/// First line of the description plus its continuation lines, collapsed
///
/// A continuation line is any non-empty line that does not open with a
/// `word(s):` label.
fn description_block(text: &str, caps: &Captures<'_>) -> Option<String> {
    let first = caps.get(1)?;
    let mut block = first.as_str().to_string();

    let mut remaining = &text[first.end()..];
    while let Some(next) = remaining.strip_prefix('\n') {
        let line_end = next.find('\n').unwrap_or(next.len());
        let line = &next[..line_end];
        if line.trim_end_matches('\r').is_empty() || starts_with_label(line) {
            break;
        }
        block.push('\n');
        block.push_str(line);
        remaining = &next[line_end..];
    }

    Some(collapse_whitespace(&block))
}

fn starts_with_label(line: &str) -> bool {
    line.chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace()))
        == Some(':')
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(field: TextField, text: &str) -> Option<String> {
        FieldRule::for_field(field).apply(text)
    }

    #[test]
    fn test_every_field_has_one_rule() {
        let rules = FieldRule::all();
        assert_eq!(rules.len(), 10);
        for (idx, rule) in rules.iter().enumerate() {
            assert!(
                rules[idx + 1..].iter().all(|other| other.field() != rule.field()),
                "duplicate rule for {}",
                rule.field().name()
            );
        }
    }

    #[test]
    fn test_policy_number() {
        assert_eq!(
            apply(TextField::PolicyNumber, "POLICY NUMBER: AUTO-2024-12345\n"),
            Some("AUTO-2024-12345".to_string())
        );
        assert_eq!(
            apply(TextField::PolicyNumber, "policy number  hx-9"),
            Some("hx-9".to_string())
        );
        assert_eq!(apply(TextField::PolicyNumber, "POLICY: 123"), None);
    }

    #[test]
    fn test_policy_number_first_match_wins() {
        let text = "POLICY NUMBER: FIRST-1\nPOLICY NUMBER: SECOND-2";
        assert_eq!(apply(TextField::PolicyNumber, text), Some("FIRST-1".to_string()));
    }

    #[test]
    fn test_policyholder_name_with_and_without_sublabel() {
        assert_eq!(
            apply(
                TextField::PolicyholderName,
                "NAME OF INSURED (First, Middle, Last): Jane Q Public\nNEXT: x"
            ),
            Some("Jane Q Public".to_string())
        );
        assert_eq!(
            apply(TextField::PolicyholderName, "NAME OF INSURED: John Michael Smith  \n"),
            Some("John Michael Smith".to_string())
        );
    }

    #[test]
    fn test_incident_date_variants() {
        assert_eq!(
            apply(TextField::IncidentDate, "DATE OF LOSS AND TIME: 12/01/2024 2:30 PM"),
            Some("12/01/2024".to_string())
        );
        assert_eq!(
            apply(TextField::IncidentDate, "date of loss: 3-7-24"),
            Some("3-7-24".to_string())
        );
        assert_eq!(apply(TextField::IncidentDate, "DATE OF LOSS: yesterday"), None);
    }

    #[test]
    fn test_incident_time() {
        assert_eq!(
            apply(TextField::IncidentTime, "DATE OF LOSS AND TIME: 12/01/2024 2:30 PM"),
            Some("2:30 PM".to_string())
        );
        assert_eq!(
            apply(TextField::IncidentTime, "Date of loss 1/2/2023 at 11:05am"),
            Some("11:05 am".to_string())
        );
        assert_eq!(apply(TextField::IncidentTime, "DATE OF LOSS: 12/01/2024"), None);
    }

    #[test]
    fn test_incident_time_stays_on_label_line() {
        let text = "DATE OF LOSS: 12/01/2024\nAPPOINTMENT: 9:00 AM";
        assert_eq!(apply(TextField::IncidentTime, text), None);
    }

    #[test]
    fn test_location_spans_label_lines() {
        let text = "LOCATION OF LOSS\nSTREET: Highway 55 and Oak Street Intersection\nCITY: Springfield";
        assert_eq!(
            apply(TextField::Location, text),
            Some("Highway 55 and Oak Street Intersection".to_string())
        );
    }

    #[test]
    fn test_description_collects_continuation_lines() {
        let text = "DESCRIPTION OF ACCIDENT: Rear-ended at the light.\n  Bumper   pushed in.\nTrunk will not open\nPOLICE DEPARTMENT CONTACTED: Springfield PD";
        assert_eq!(
            apply(TextField::Description, text),
            Some("Rear-ended at the light. Bumper pushed in. Trunk will not open".to_string())
        );
    }

    #[test]
    fn test_description_stops_at_blank_line() {
        let text = "DESCRIPTION OF ACCIDENT:\nHit a deer.\n\nMore text later";
        assert_eq!(apply(TextField::Description, text), Some("Hit a deer.".to_string()));
    }

    #[test]
    fn test_description_handles_crlf() {
        let text = "DESCRIPTION OF ACCIDENT: Slid on ice.\r\nHit a pole.\r\n\r\nPOLICE: none";
        assert_eq!(
            apply(TextField::Description, text),
            Some("Slid on ice. Hit a pole.".to_string())
        );
    }

    #[test]
    fn test_claimant() {
        assert_eq!(
            apply(TextField::Claimant, "DRIVER'S NAME AND ADDRESS: John Smith, 1 Elm St\n"),
            Some("John Smith, 1 Elm St".to_string())
        );
        assert_eq!(apply(TextField::Claimant, "DRIVER'S NAME: Sarah"), None);
    }

    #[test]
    fn test_phone_formats() {
        for (text, expected) in [
            ("PRIMARY PHONE #: (555) 123-4567", "(555) 123-4567"),
            ("PRIMARY PHONE#:555.123.4567", "555.123.4567"),
            ("primary phone # 5551234567", "5551234567"),
        ] {
            assert_eq!(apply(TextField::ContactPhone, text), Some(expected.to_string()));
        }
        assert_eq!(apply(TextField::ContactPhone, "PRIMARY PHONE #: call me"), None);
    }

    #[test]
    fn test_email() {
        assert_eq!(
            apply(TextField::ContactEmail, "PRIMARY E-MAIL ADDRESS: john.smith@email.com\n"),
            Some("john.smith@email.com".to_string())
        );
        assert_eq!(apply(TextField::ContactEmail, "PRIMARY E-MAIL ADDRESS: none"), None);
    }

    #[test]
    fn test_vin_must_be_exactly_seventeen() {
        assert_eq!(
            apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN109186\nPLATE"),
            Some("1HGBH41JXMN109186".to_string())
        );
        assert_eq!(
            apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN109186"),
            Some("1HGBH41JXMN109186".to_string())
        );
        assert_eq!(apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN10918"), None);
        assert_eq!(apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN1091867"), None);
    }

    #[test]
    fn test_vin_requires_literal_dots() {
        assert_eq!(apply(TextField::AssetId, "VIN: 1HGBH41JXMN109186"), None);
    }

    #[test]
    fn test_vin_is_ascii_only() {
        // Kelvin sign and long s fold to K and s under Unicode case folding
        assert_eq!(apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN10918\u{212A}"), None);
        assert_eq!(apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN10918\u{17F}"), None);
        assert_eq!(
            apply(TextField::AssetId, "V.I.N.: 1HGBH41JXMN109186\u{212A}"),
            Some("1HGBH41JXMN109186".to_string())
        );
    }

    #[test]
    fn test_policy_number_is_ascii_only() {
        assert_eq!(
            apply(TextField::PolicyNumber, "POLICY NUMBER: AB\u{212A}-12"),
            Some("AB".to_string())
        );
        assert_eq!(apply(TextField::PolicyNumber, "POLICY NUMBER: \u{17F}123"), None);
    }

    #[test]
    fn test_description_labels_are_checked_per_line() {
        let text = "DESCRIPTION OF ACCIDENT: a\nb\nPOLICE: x";
        assert_eq!(apply(TextField::Description, text), Some("a b".to_string()));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }
}
