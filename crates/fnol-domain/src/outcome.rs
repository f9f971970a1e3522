//! Processing outcome - what a caller gets back for one document

use crate::{FieldRecord, MandatoryField, RouteLabel, RoutingDecision};
use serde::Serialize;

/// Complete result of processing one FNOL document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedClaim {
    /// Structured fields pulled from the text
    pub extracted_fields: FieldRecord,

    /// Mandatory fields that were absent, in reporting order
    pub missing_fields: Vec<MandatoryField>,

    /// Queue the claim should go to
    pub recommended_route: RouteLabel,

    /// Why that queue was chosen
    pub reasoning: String,
}

impl ProcessedClaim {
    /// Assemble the outcome from the three pipeline stages
    pub fn new(
        extracted_fields: FieldRecord,
        missing_fields: Vec<MandatoryField>,
        decision: RoutingDecision,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
        }
    }

    /// Whether every mandatory field was found
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}
