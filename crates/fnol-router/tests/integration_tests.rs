//! Integration tests for the Router

use fnol_domain::traits::ClaimRouter;
use fnol_domain::{ClaimType, FieldRecord, MandatoryField, RouteLabel};
use fnol_router::{ConfigError, Router, RouterConfig, RoutingRule};
use rust_decimal::Decimal;
use std::fs;
use tempfile::TempDir;

fn complete_record(amount: Decimal, claim_type: ClaimType) -> FieldRecord {
    FieldRecord {
        policy_number: Some("POL-1".to_string()),
        estimated_damage: Some(amount),
        claim_type,
        ..FieldRecord::default()
    }
}

#[test]
fn test_router_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("routing.toml");
    fs::write(
        &path,
        r#"
fast_track_threshold = "1000.50"
fraud_keywords = ["arson"]
"#,
    )
    .unwrap();

    let router = Router::new(RouterConfig::from_file(&path).unwrap());

    let cheap = complete_record(Decimal::new(100050, 2), ClaimType::Collision);
    let decision = router.route(&cheap, &[], "");
    assert_eq!(decision.route, RouteLabel::StandardProcessing);
    assert_eq!(
        decision.reasoning,
        "Damage estimate ($1,000.5) exceeds fast-track threshold"
    );

    let cheaper = complete_record(Decimal::new(1000, 0), ClaimType::Collision);
    assert_eq!(router.route(&cheaper, &[], "").route, RouteLabel::FastTrack);

    // Default keywords are replaced, not extended
    assert_eq!(router.route(&cheaper, &[], "staged").route, RouteLabel::FastTrack);
    assert_eq!(
        router.route(&cheaper, &[], "Suspected ARSON").route,
        RouteLabel::Investigation
    );
}

#[test]
fn test_missing_config_file() {
    let result = RouterConfig::from_file("/nonexistent/fnol/routing.toml");
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_rule_priority_end_to_end() {
    let router = Router::default();
    let injury = complete_record(Decimal::new(500, 0), ClaimType::Injury);

    let decision = router.route(&injury, &[MandatoryField::Location], "fraud");
    assert_eq!(decision.route, RouteLabel::ManualReview);
    assert_eq!(decision.reasoning, "Missing mandatory fields: Location");

    let decision = router.route(&injury, &[], "fraud");
    assert_eq!(decision.route, RouteLabel::Investigation);

    let decision = router.route(&injury, &[], "");
    assert_eq!(decision.route, RouteLabel::SpecialistQueue);

    let property = complete_record(Decimal::new(500, 0), ClaimType::Property);
    assert_eq!(router.route(&property, &[], "").route, RouteLabel::FastTrack);
}

#[test]
fn test_undetermined_without_estimate() {
    let router = Router::default();
    let record = FieldRecord::default();

    let decision = router.route(&record, &[], "");
    assert_eq!(decision.route, RouteLabel::ManualReview);
    assert_eq!(decision.reasoning, "Unable to determine damage estimate");
}

#[test]
fn test_every_rule_has_a_name() {
    let names: Vec<_> = RoutingRule::ORDER.iter().map(RoutingRule::name).collect();
    assert_eq!(
        names,
        [
            "missing_fields",
            "fraud_indicators",
            "injury_claim",
            "damage_estimate"
        ]
    );
}
