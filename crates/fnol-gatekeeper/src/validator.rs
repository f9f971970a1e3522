//! Mandatory field validation

use fnol_domain::traits::FieldValidator;
use fnol_domain::{FieldRecord, MandatoryField};
use tracing::debug;

/// The Gatekeeper checks records for missing mandatory fields
#[derive(Debug, Clone, Copy, Default)]
pub struct Gatekeeper;

impl Gatekeeper {
    /// Create a new Gatekeeper
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator for Gatekeeper {
    fn validate(&self, fields: &FieldRecord) -> Vec<MandatoryField> {
        let missing: Vec<MandatoryField> = MandatoryField::ALL
            .into_iter()
            .filter(|field| is_missing(*field, fields))
            .collect();

        debug!(missing = missing.len(), "Validation complete");
        missing
    }
}

/// Whether a mandatory field is absent from a record
///
/// Text fields count as missing when `None` or empty. The damage estimate is
/// missing only when `None`; an estimate of zero is present.
pub fn is_missing(field: MandatoryField, record: &FieldRecord) -> bool {
    match field {
        MandatoryField::PolicyNumber => blank(&record.policy_number),
        MandatoryField::PolicyholderName => blank(&record.policyholder_name),
        MandatoryField::IncidentDate => blank(&record.incident_date),
        MandatoryField::Location => blank(&record.location),
        MandatoryField::Description => blank(&record.description),
        MandatoryField::Claimant => blank(&record.claimant),
        MandatoryField::AssetType => record.asset_type.is_empty(),
        MandatoryField::AssetId => blank(&record.asset_id),
        MandatoryField::EstimatedDamage => record.estimated_damage.is_none(),
        MandatoryField::ClaimType => false,
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
