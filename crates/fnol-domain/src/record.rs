//! Field record module - the structured view of one FNOL document

use crate::ClaimType;
use rust_decimal::Decimal;
use serde::Serialize;

/// Asset type used when year, make and model cannot all be located
pub const ASSET_TYPE_FALLBACK: &str = "Vehicle";

/// Fields extracted from a First-Notice-of-Loss document
///
/// Text fields are `None` when their label was not found. `asset_type` and
/// `claim_type` are always populated. A record is never modified after the
/// extractor hands it out; downstream stages only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    /// Policy number token (letters, digits, hyphens)
    pub policy_number: Option<String>,

    /// Name of the insured
    pub policyholder_name: Option<String>,

    /// Date of loss exactly as written in the document
    pub incident_date: Option<String>,

    /// Time of loss as `"H:MM AM|PM"`
    pub incident_time: Option<String>,

    /// Street of the loss location
    pub location: Option<String>,

    /// Accident description with whitespace collapsed
    pub description: Option<String>,

    /// Driver name and address
    pub claimant: Option<String>,

    /// Primary contact phone
    pub contact_phone: Option<String>,

    /// Primary contact e-mail
    pub contact_email: Option<String>,

    /// 17-character vehicle identification number
    pub asset_id: Option<String>,

    /// `"YEAR MAKE MODEL"`, or [`ASSET_TYPE_FALLBACK`]
    pub asset_type: String,

    /// Estimated damage amount
    #[serde(serialize_with = "crate::amount::serialize_optional")]
    pub estimated_damage: Option<Decimal>,

    /// Keyword-derived claim category
    pub claim_type: ClaimType,
}

impl Default for FieldRecord {
    /// A record where nothing matched
    fn default() -> Self {
        Self {
            policy_number: None,
            policyholder_name: None,
            incident_date: None,
            incident_time: None,
            location: None,
            description: None,
            claimant: None,
            contact_phone: None,
            contact_email: None,
            asset_id: None,
            asset_type: ASSET_TYPE_FALLBACK.to_string(),
            estimated_damage: None,
            claim_type: ClaimType::default(),
        }
    }
}
