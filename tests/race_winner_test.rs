mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn mixed_case_race_matches_and_input_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/2024/Bahrain").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({
            "year": 2024,
            "race": "Bahrain",
            "winner": "Max Verstappen"
        })
    );
}

#[tokio::test]
async fn surrounding_whitespace_is_ignored_for_matching_only() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/2021/%20BAHRAIN%20").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["race"], " BAHRAIN ");
    assert_eq!(body["winner"], "Lewis Hamilton");
}

#[tokio::test]
async fn canonical_lowercase_lookup_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/2024/cape_town").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["winner"], "Abdul Davids");
}

#[tokio::test]
async fn unknown_race_in_known_year_returns_the_race_message() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/2024/monza").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Data not available for the requested race.");
}

#[tokio::test]
async fn unknown_year_takes_precedence_over_unknown_race() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/1999/bahrain").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Data not available for the requested year.");
}
