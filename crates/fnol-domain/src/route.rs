//! Routing module - processing queues and the decision that selects one

use serde::Serialize;
use std::fmt;

/// Separator between individual justifications in [`RoutingDecision::reasoning`]
pub const REASON_SEPARATOR: &str = " | ";

/// Processing queue a claim can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouteLabel {
    /// A handler has to look at the claim (incomplete or undecidable)
    #[serde(rename = "Manual Review")]
    ManualReview,

    /// Special investigations unit
    #[serde(rename = "Investigation")]
    Investigation,

    /// Injury specialists
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,

    /// Low-value claims settled without adjuster review
    #[serde(rename = "Fast-track")]
    FastTrack,

    /// Regular adjuster workflow
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
}

impl RouteLabel {
    /// Display name of the queue
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteLabel::ManualReview => "Manual Review",
            RouteLabel::Investigation => "Investigation",
            RouteLabel::SpecialistQueue => "Specialist Queue",
            RouteLabel::FastTrack => "Fast-track",
            RouteLabel::StandardProcessing => "Standard Processing",
        }
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The queue chosen for a claim and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    /// Selected queue
    pub route: RouteLabel,

    /// Justifications joined with [`REASON_SEPARATOR`]
    pub reasoning: String,
}

impl RoutingDecision {
    /// Build a decision from one or more justifications
    pub fn new<I, S>(route: RouteLabel, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reasoning = reasons
            .into_iter()
            .map(|r| r.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR);
        Self { route, reasoning }
    }

    /// Individual justifications
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.reasoning.split(REASON_SEPARATOR)
    }
}
