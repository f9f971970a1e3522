//! The ordered routing rules

use crate::config::RouterConfig;
use fnol_domain::{format_amount, ClaimType, FieldRecord, MandatoryField, RouteLabel, RoutingDecision};

/// Everything a routing rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RoutingContext<'a> {
    /// Extracted fields
    pub fields: &'a FieldRecord,

    /// Missing mandatory fields, in reporting order
    pub missing: &'a [MandatoryField],

    /// Original document text
    pub raw_text: &'a str,
}

/// One step of the routing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingRule {
    /// Incomplete claims go to manual review
    MissingFields,

    /// Fraud keywords anywhere in the text trigger investigation
    FraudIndicators,

    /// Injury claims go to specialists
    InjuryClaim,

    /// Damage estimate decides between fast-track and standard processing
    DamageEstimate,
}

impl RoutingRule {
    /// Evaluation order; the first rule that applies decides the route
    ///
    /// A claim no rule applies to goes to manual review.
    pub const ORDER: [RoutingRule; 4] = [
        RoutingRule::MissingFields,
        RoutingRule::FraudIndicators,
        RoutingRule::InjuryClaim,
        RoutingRule::DamageEstimate,
    ];

    /// Short rule name for logs
    pub fn name(&self) -> &'static str {
        match self {
            RoutingRule::MissingFields => "missing_fields",
            RoutingRule::FraudIndicators => "fraud_indicators",
            RoutingRule::InjuryClaim => "injury_claim",
            RoutingRule::DamageEstimate => "damage_estimate",
        }
    }

    /// Apply this rule alone; `None` when it does not apply
    pub fn evaluate(&self, ctx: &RoutingContext<'_>, config: &RouterConfig) -> Option<RoutingDecision> {
        match self {
            RoutingRule::MissingFields => {
                if ctx.missing.is_empty() {
                    return None;
                }
                let labels: Vec<&str> = ctx.missing.iter().map(|f| f.label()).collect();
                Some(RoutingDecision::new(
                    RouteLabel::ManualReview,
                    [format!("Missing mandatory fields: {}", labels.join(", "))],
                ))
            }
            RoutingRule::FraudIndicators => {
                if !has_fraud_indicator(ctx.raw_text, &config.fraud_keywords) {
                    return None;
                }
                Some(RoutingDecision::new(
                    RouteLabel::Investigation,
                    ["Fraud indicators detected in description"],
                ))
            }
            RoutingRule::InjuryClaim => {
                if ctx.fields.claim_type != ClaimType::Injury {
                    return None;
                }
                Some(RoutingDecision::new(
                    RouteLabel::SpecialistQueue,
                    ["Injury claim requires specialist review"],
                ))
            }
            RoutingRule::DamageEstimate => {
                let amount = ctx.fields.estimated_damage?;
                let decision = if amount < config.fast_track_threshold {
                    RoutingDecision::new(
                        RouteLabel::FastTrack,
                        [format!(
                            "Low damage estimate (${}) qualifies for fast-track processing",
                            format_amount(&amount)
                        )],
                    )
                } else {
                    RoutingDecision::new(
                        RouteLabel::StandardProcessing,
                        [format!(
                            "Damage estimate (${}) exceeds fast-track threshold",
                            format_amount(&amount)
                        )],
                    )
                };
                Some(decision)
            }
        }
    }
}

/// Decision for a claim no rule applies to
pub(crate) fn undetermined() -> RoutingDecision {
    RoutingDecision::new(RouteLabel::ManualReview, ["Unable to determine damage estimate"])
}

fn has_fraud_indicator(raw_text: &str, keywords: &[String]) -> bool {
    let text = raw_text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| text.contains(&k))
}
