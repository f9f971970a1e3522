//! Router implementation

use crate::config::RouterConfig;
use crate::policy::{undetermined, RoutingContext, RoutingRule};
use fnol_domain::traits::ClaimRouter;
use fnol_domain::{FieldRecord, MandatoryField, RoutingDecision};
use tracing::debug;

/// Applies the routing policy to extracted claims
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Create a new Router with the given configuration
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Create a Router with default configuration
    pub fn default_config() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl ClaimRouter for Router {
    fn route(
        &self,
        fields: &FieldRecord,
        missing: &[MandatoryField],
        raw_text: &str,
    ) -> RoutingDecision {
        let ctx = RoutingContext { fields, missing, raw_text };

        RoutingRule::ORDER
            .iter()
            .find_map(|rule| {
                let decision = rule.evaluate(&ctx, &self.config)?;
                debug!(rule = rule.name(), route = %decision.route, "Routing rule matched");
                Some(decision)
            })
            .unwrap_or_else(|| {
                debug!("No routing rule matched");
                undetermined()
            })
    }
}
