//! Integration tests for scenario generation and lookup.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_generate_earthquake_scenario_returns_active_template_session() {
    let app = common::build_test_app(common::test_state());

    let (status, json) = common::post_json(
        app,
        "/generate-scenario",
        &serde_json::json!({ "crisisType": "earthquake" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["scenario"]["title"], "Major Earthquake Response");
    assert_eq!(json["scenario"]["status"], "active");
    assert_eq!(json["scenario"]["turn"], 1);
    assert_eq!(json["scenario"]["roles"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_generate_unknown_type_falls_back_to_default_template() {
    let app = common::build_test_app(common::test_state());

    let (status, json) = common::post_json(
        app,
        "/api/scenario",
        &serde_json::json!({ "crisisType": "volcano" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scenario"]["crisisType"], "earthquake");
}

#[tokio::test]
async fn test_generate_applies_customization() {
    let app = common::build_test_app(common::test_state());

    let (status, json) = common::post_json(
        app,
        "/api/scenario",
        &serde_json::json!({
            "crisisType": "flood",
            "location": "Coastal Kochi",
            "buildingType": "hospital",
            "teamSize": 7,
            "complexity": "high",
            "peopleAffected": 12000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let scenario = &json["scenario"];
    assert_eq!(scenario["complexity"], "high");
    assert_eq!(scenario["environmentFactors"].as_array().unwrap().len(), 2);
    let assignments = scenario["roleAssignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 7);
    assert_eq!(assignments[2]["assignment"], "primary");
    assert_eq!(assignments[3]["assignment"], "support");
    assert!(
        scenario["briefing"]
            .as_str()
            .unwrap()
            .contains("approximately 12000 people")
    );
}

#[tokio::test]
async fn test_generated_scenario_round_trips_through_both_lookup_paths() {
    let state = common::test_state();
    let session_id = common::generate(&state, "wildfire").await;

    for uri in [
        format!("/scenario/{session_id}"),
        format!("/api/scenario/{session_id}"),
    ] {
        let (status, json) = common::get_json(common::build_test_app(state.clone()), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scenario"]["id"], session_id);
        assert_eq!(json["scenario"]["crisisType"], "wildfire");
    }
}

#[tokio::test]
async fn test_get_nonexistent_scenario_returns_404() {
    let app = common::build_test_app(common::test_state());

    let (status, json) =
        common::get_json(app, "/api/scenario/00000000-0000-0000-0000-000000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "session_not_found");
}
