//! Pipeline composition

use fnol_domain::traits::{ClaimRouter, FieldExtractor, FieldValidator};
use fnol_domain::ProcessedClaim;
use fnol_extractor::Extractor;
use fnol_gatekeeper::Gatekeeper;
use fnol_router::{Router, RouterConfig};
use tracing::{info, info_span};

/// Extract → validate → route, for one document at a time
///
/// Holds no per-document state, so a single pipeline can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct ClaimsPipeline<E, V, R> {
    extractor: E,
    validator: V,
    router: R,
}

/// The pipeline built from the stock components
pub type StandardPipeline = ClaimsPipeline<Extractor, Gatekeeper, Router>;

impl<E, V, R> ClaimsPipeline<E, V, R>
where
    E: FieldExtractor,
    V: FieldValidator,
    R: ClaimRouter,
{
    /// Compose a pipeline from three components
    pub fn new(extractor: E, validator: V, router: R) -> Self {
        Self {
            extractor,
            validator,
            router,
        }
    }

    /// Process one plain-text document
    pub fn process(&self, raw_text: &str) -> ProcessedClaim {
        let span = info_span!("process_document", bytes = raw_text.len());
        let _guard = span.enter();

        let fields = self.extractor.extract(raw_text);
        let missing = self.validator.validate(&fields);
        let decision = self.router.route(&fields, &missing, raw_text);

        info!(
            route = %decision.route,
            missing = missing.len(),
            claim_type = %fields.claim_type,
            "Document processed"
        );

        ProcessedClaim::new(fields, missing, decision)
    }
}

impl StandardPipeline {
    /// Stock components with the default routing policy
    pub fn standard() -> Self {
        Self::with_router_config(RouterConfig::default())
    }

    /// Stock components with a custom routing policy
    pub fn with_router_config(config: RouterConfig) -> Self {
        Self::new(Extractor::new(), Gatekeeper::new(), Router::new(config))
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Process one document with the default components and policy
pub fn process_document(raw_text: &str) -> ProcessedClaim {
    StandardPipeline::standard().process(raw_text)
}
