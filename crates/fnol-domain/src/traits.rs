//! Trait definitions for the three pipeline stages
//!
//! Every stage is a total function of its inputs: none of them can fail, and
//! none of them keeps state between documents.

use crate::{FieldRecord, MandatoryField, RoutingDecision};

/// Turns raw document text into a field record
///
/// Implemented by the extraction layer (fnol-extractor)
pub trait FieldExtractor {
    /// Extract fields from plain text; unmatched fields are left empty
    fn extract(&self, text: &str) -> FieldRecord;
}

/// Checks a field record for completeness
///
/// Implemented by the validation layer (fnol-gatekeeper)
pub trait FieldValidator {
    /// Mandatory fields that are absent, in [`MandatoryField::ALL`] order
    fn validate(&self, fields: &FieldRecord) -> Vec<MandatoryField>;
}

/// Picks the processing queue for a claim
///
/// Implemented by the routing layer (fnol-router)
pub trait ClaimRouter {
    /// Decide the route for a claim
    ///
    /// `raw_text` is the original document, scanned for fraud indicators.
    fn route(
        &self,
        fields: &FieldRecord,
        missing: &[MandatoryField],
        raw_text: &str,
    ) -> RoutingDecision;
}
