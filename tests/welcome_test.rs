mod common;

use common::TestApp;

#[tokio::test]
async fn root_returns_the_welcome_message() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["message"],
        "Welcome to the F1 Race Winners API! Docs at /docs."
    );
}

#[tokio::test]
async fn swagger_ui_is_served_at_docs() {
    let app = TestApp::spawn().await;

    // reqwest follows the redirect to the UI index.
    let response = app.get("/docs").await;

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to get response body");
    assert!(body.contains("swagger-ui"), "Unexpected docs page: {}", body);
}

#[tokio::test]
async fn openapi_document_lists_the_winner_operations() {
    let app = TestApp::spawn().await;

    let response = app.get("/.well-known/openapi.json").await;

    assert!(response.status().is_success());

    let doc: serde_json::Value = response.json().await.expect("Failed to parse JSON");

    assert_eq!(doc["paths"]["/"]["get"]["operationId"], "root");
    assert_eq!(
        doc["paths"]["/winners/{year}"]["get"]["operationId"],
        "getYearWinners"
    );
    assert_eq!(
        doc["paths"]["/winners/{year}/{race}"]["get"]["operationId"],
        "getRaceWinner"
    );
    assert_eq!(doc["servers"][0]["url"], "http://localhost:8000");
}
