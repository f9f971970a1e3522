//! Core Extractor implementation

use crate::amount::estimated_damage;
use crate::classifier::classify_claim_type;
use crate::rules::FieldRule;
use crate::vehicle::asset_type;
use fnol_domain::traits::FieldExtractor;
use fnol_domain::FieldRecord;
use tracing::{debug, trace};

/// Rule-based field extractor for FNOL documents
///
/// Stateless; compiled patterns are shared statics, so one instance can serve
/// any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    /// Create a new Extractor
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for Extractor {
    fn extract(&self, text: &str) -> FieldRecord {
        let mut record = FieldRecord::default();

        for rule in FieldRule::all() {
            let value = rule.apply(text);
            match &value {
                Some(v) => trace!(field = rule.field().name(), value = %v, "matched"),
                None => debug!(field = rule.field().name(), "no match"),
            }
            *rule.field().slot(&mut record) = value;
        }

        record.asset_type = asset_type(text);
        record.estimated_damage = estimated_damage(text);
        record.claim_type = classify_claim_type(text);

        debug!(
            asset_type = %record.asset_type,
            claim_type = %record.claim_type,
            has_estimate = record.estimated_damage.is_some(),
            "Extraction complete"
        );

        record
    }
}
