//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use fnol_domain::{FieldRecord, ProcessedClaim, RouteLabel};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Shown in place of absent or empty field values.
pub const NOT_FOUND: &str = "Not Found";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a processed claim.
    pub fn format_outcome(&self, outcome: &ProcessedClaim) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
            OutputFormat::Quiet => Ok(outcome.recommended_route.to_string()),
        }
    }

    /// Route banner, field table, then the missing list when non-empty.
    fn format_outcome_table(&self, outcome: &ProcessedClaim) -> String {
        let route = outcome.recommended_route;
        let banner = format!("{} Recommended Route: {}", route_icon(route), route);

        let mut sections = vec![
            format!(
                "{}\n  {}",
                self.colorize(&banner, route_color(route)),
                outcome.reasoning
            ),
            self.fields_table(&outcome.extracted_fields),
        ];

        if !outcome.missing_fields.is_empty() {
            let mut missing = self.colorize(
                &format!("Missing Mandatory Fields ({})", outcome.missing_fields.len()),
                "red",
            );
            for field in &outcome.missing_fields {
                missing.push_str(&format!("\n  • {}", field));
            }
            sections.push(missing);
        }

        sections.join("\n\n")
    }

    fn fields_table(&self, record: &FieldRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        for (key, value) in field_values(record) {
            let value = match value {
                Some(v) if !v.is_empty() => v,
                _ => self.colorize(NOT_FOUND, "red"),
            };
            builder.push_record([humanize(key), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn route_color(route: RouteLabel) -> &'static str {
    match route {
        RouteLabel::FastTrack => "green",
        RouteLabel::ManualReview => "yellow",
        RouteLabel::Investigation => "red",
        RouteLabel::SpecialistQueue => "blue",
        RouteLabel::StandardProcessing => "plain",
    }
}

fn route_icon(route: RouteLabel) -> &'static str {
    match route {
        RouteLabel::FastTrack => "✓",
        RouteLabel::ManualReview => "!",
        RouteLabel::Investigation => "⚠",
        RouteLabel::SpecialistQueue => "◷",
        RouteLabel::StandardProcessing => "•",
    }
}

/// Record fields in declaration order, keyed by their serialized names.
fn field_values(record: &FieldRecord) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("policyNumber", record.policy_number.clone()),
        ("policyholderName", record.policyholder_name.clone()),
        ("incidentDate", record.incident_date.clone()),
        ("incidentTime", record.incident_time.clone()),
        ("location", record.location.clone()),
        ("description", record.description.clone()),
        ("claimant", record.claimant.clone()),
        ("contactPhone", record.contact_phone.clone()),
        ("contactEmail", record.contact_email.clone()),
        ("assetId", record.asset_id.clone()),
        ("assetType", Some(record.asset_type.clone())),
        (
            "estimatedDamage",
            record.estimated_damage.map(|d| d.normalize().to_string()),
        ),
        ("claimType", Some(record.claim_type.to_string())),
    ]
}

/// `"contactPhone"` → `"Contact Phone"`.
pub fn humanize(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_pipeline::{process_document, SAMPLE_FNOL};

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("policyNumber"), "Policy Number");
        assert_eq!(humanize("assetId"), "Asset Id");
        assert_eq!(humanize("location"), "Location");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_outcome(&process_document(SAMPLE_FNOL)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommendedRoute"], "Specialist Queue");
        assert_eq!(value["extractedFields"]["estimatedDamage"], 18500);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_outcome(&process_document("")).unwrap();
        assert_eq!(output, "Manual Review");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_outcome(&process_document(SAMPLE_FNOL)).unwrap();
        assert!(output.starts_with("◷ Recommended Route: Specialist Queue"));
        assert!(output.contains("Injury claim requires specialist review"));
        assert!(output.contains("Policyholder Name"));
        assert!(output.contains("2022 Toyota Camry"));
        assert!(output.contains("18500"));
        assert!(!output.contains("Missing Mandatory Fields"));
    }

    #[test]
    fn test_table_lists_missing_fields() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_outcome(&process_document("")).unwrap();
        assert!(output.contains("Missing Mandatory Fields (8)"));
        assert!(output.contains("• Policy Number"));
        assert!(output.contains(NOT_FOUND));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
