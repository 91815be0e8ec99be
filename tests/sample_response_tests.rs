use pinnacle_rs::dto::{ApplicationDetails, MatchupOdds, StatusDetails, UpstreamServiceStatus};
use pretty_assertions::assert_eq;

#[test]
fn test_application_details_ignores_unknown_fields() {
    let json = include_str!("fixtures/app.json");

    let details: ApplicationDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.api_key(), "CmX2KcMrXuFmNg6YFbmTxE0y9CIrOi0R");
}

#[test]
fn test_application_details_minimal_document() {
    let json = r#"{"api":{"haywire":{"apiKey":"K"}}}"#;

    let details: ApplicationDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.into_api_key(), "K");
}

#[test]
fn test_application_details_without_api_block() {
    let json = r#"{"version":"6.6.65-rel","environment":"PRODUCTION"}"#;

    let result: Result<ApplicationDetails, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_status_details_preserves_order() {
    let json = include_str!("fixtures/status.json");

    let status: StatusDetails = serde_json::from_str(json).unwrap();
    assert_eq!(
        status.description,
        "System is operating correctly, no known issues."
    );

    let names: Vec<&str> = status.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["api", "etl", "search", "websocket"]);

    assert_eq!(
        status.upstream_services[9],
        UpstreamServiceStatus {
            name: "responsible_gaming".to_string(),
            status: String::new(),
            health: "ONLINE".to_string(),
        }
    );
}

#[test]
fn test_matchup_odds_negative_prices() {
    let json = include_str!("fixtures/straight_odds.json");

    let odds: Vec<MatchupOdds> = serde_json::from_str(json).unwrap();
    assert_eq!(odds.len(), 2);

    let total = &odds[0];
    assert_eq!(total.prices.len(), 2);
    assert_eq!(total.prices[0].participant_id, 1184320733);
    assert_eq!(total.prices[0].points, 224.5);
    assert_eq!(total.prices[0].price, -108.0);
    assert_eq!(total.prices[1].price, -104.0);
}

#[test]
fn test_moneyline_price_without_points() {
    let json = r#"{
    "matchupId": 1184320731,
    "key": "s;0;m",
    "type": "moneyline",
    "version": 331289501,
    "prices": [
        { "designation": "home", "price": -250 },
        { "designation": "away", "price": 210 }
    ]
}"#;

    let odds: MatchupOdds = serde_json::from_str(json).unwrap();
    assert_eq!(odds.market_type, "moneyline");
    assert_eq!(odds.prices[0].participant_id, 0);
    assert_eq!(odds.prices[0].points, 0.0);
    assert_eq!(odds.prices[0].price, -250.0);
    assert_eq!(odds.prices[1].decimal_odds(), Some(3.1));
}

#[test]
fn test_matchup_odds_serializes_upstream_field_names() {
    let json = include_str!("fixtures/straight_odds.json");

    let odds: Vec<MatchupOdds> = serde_json::from_str(json).unwrap();
    let value = serde_json::to_value(&odds[1]).unwrap();

    assert_eq!(value["matchupId"], 1184320731u64);
    assert_eq!(value["type"], "spread");
    assert!(value.get("market_type").is_none());
}

#[test]
fn test_status_details_without_upstream() {
    let json = r#"{"code":"ONLINE","description":"ok","services":[]}"#;

    let status: StatusDetails = serde_json::from_str(json).unwrap();
    assert_eq!(status.code, "ONLINE");
    assert!(status.services.is_empty());
    assert!(status.upstream_services.is_empty());
}

#[test]
fn test_status_details_null_fields() {
    let json = r#"{
    "code": "ONLINE",
    "description": null,
    "services": [{ "name": "api", "status": null }],
    "upstream": null
}"#;

    let status: StatusDetails = serde_json::from_str(json).unwrap();
    assert_eq!(status.description, "");
    assert_eq!(status.services[0].name, "api");
    assert_eq!(status.services[0].status, "");
    assert!(status.upstream_services.is_empty());
}

#[test]
fn test_price_with_null_points() {
    let json = r#"[{
    "matchupId": 1184320731,
    "key": "s;0;m",
    "type": "moneyline",
    "version": null,
    "prices": [{ "participantId": 1184320732, "points": null, "price": -199 }]
}]"#;

    let odds: Vec<MatchupOdds> = serde_json::from_str(json).unwrap();
    assert_eq!(odds[0].version, 0);
    assert_eq!(odds[0].prices[0].participant_id, 1184320732);
    assert_eq!(odds[0].prices[0].points, 0.0);
    assert_eq!(odds[0].prices[0].price, -199.0);
}

#[test]
fn test_matchup_odds_wrong_type_is_rejected() {
    let json = r#"[{ "matchupId": "not-a-number", "key": "s;0;m", "type": "moneyline" }]"#;

    let result: Result<Vec<MatchupOdds>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
