mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn listing_2021_returns_the_recorded_season_in_order() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/2021").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({
            "year": 2021,
            "winners": [
                { "race": "bahrain", "winner": "Lewis Hamilton" },
                { "race": "emilia_romagna", "winner": "Max Verstappen" },
                { "race": "portuguese", "winner": "Lewis Hamilton" }
            ]
        })
    );
}

#[tokio::test]
async fn unknown_year_returns_404_with_the_year_message() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/1950").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Data not available for the requested year.");
}

#[tokio::test]
async fn non_integer_year_is_rejected_by_request_parsing() {
    let app = TestApp::spawn().await;

    let response = app.get("/winners/monaco").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_listings_are_identical() {
    let app = TestApp::spawn().await;

    let first: serde_json::Value = app
        .get("/winners/2023")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    let second: serde_json::Value = app
        .get("/winners/2023")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(first, second);
}
