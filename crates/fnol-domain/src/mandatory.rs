//! Mandatory field module - the fixed completeness checklist

use serde::Serialize;
use std::fmt;

/// A field every claim must carry before it can be routed automatically
///
/// The declaration order is the reporting order: missing fields are always
/// listed in the order of [`MandatoryField::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MandatoryField {
    /// Policy number
    #[serde(rename = "Policy Number")]
    PolicyNumber,

    /// Name of the insured
    #[serde(rename = "Policyholder Name")]
    PolicyholderName,

    /// Date of loss
    #[serde(rename = "Incident Date")]
    IncidentDate,

    /// Loss location
    #[serde(rename = "Location")]
    Location,

    /// Accident description
    #[serde(rename = "Description")]
    Description,

    /// Driver / claimant
    #[serde(rename = "Claimant")]
    Claimant,

    /// Vehicle description
    #[serde(rename = "Asset Type")]
    AssetType,

    /// Vehicle identification number
    #[serde(rename = "Asset ID")]
    AssetId,

    /// Damage estimate
    #[serde(rename = "Estimated Damage")]
    EstimatedDamage,

    /// Claim category
    #[serde(rename = "Claim Type")]
    ClaimType,
}

impl MandatoryField {
    /// All mandatory fields in reporting order
    pub const ALL: [MandatoryField; 10] = [
        MandatoryField::PolicyNumber,
        MandatoryField::PolicyholderName,
        MandatoryField::IncidentDate,
        MandatoryField::Location,
        MandatoryField::Description,
        MandatoryField::Claimant,
        MandatoryField::AssetType,
        MandatoryField::AssetId,
        MandatoryField::EstimatedDamage,
        MandatoryField::ClaimType,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "Policy Number",
            MandatoryField::PolicyholderName => "Policyholder Name",
            MandatoryField::IncidentDate => "Incident Date",
            MandatoryField::Location => "Location",
            MandatoryField::Description => "Description",
            MandatoryField::Claimant => "Claimant",
            MandatoryField::AssetType => "Asset Type",
            MandatoryField::AssetId => "Asset ID",
            MandatoryField::EstimatedDamage => "Estimated Damage",
            MandatoryField::ClaimType => "Claim Type",
        }
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
