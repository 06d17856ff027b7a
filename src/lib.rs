//! race-winners-service: a read-only HTTP API serving Formula 1 race winners
//! by season and by race, from a fixed in-memory table.

pub mod config;
pub mod dataset;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceConfig;
use crate::dataset::Dataset;
use crate::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::winners::welcome,
        handlers::winners::year_winners,
        handlers::winners::race_winner,
        handlers::health::health_check,
    ),
    components(schemas(
        dtos::MessageResponse,
        dtos::RaceWinner,
        dtos::YearWinnersResponse,
        dtos::RaceWinnerResponse,
    )),
    servers((url = "http://localhost:8000", description = "Local server")),
    tags(
        (
            name = "F1",
            description = "Endpoints related to F1 races and winners.",
            external_docs(url = "http://localhost:8000/docs", description = "F1 official website")
        ),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub dataset: Arc<Dataset>,
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::winners::welcome))
        .route("/winners/:year", get(handlers::winners::year_winners))
        .route("/winners/:year/:race", get(handlers::winners::race_winner))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::metrics));

    // Only add Swagger UI if enabled in config
    if state.config.docs.enabled {
        app =
            app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()));
    } else {
        // If Swagger UI is disabled, still provide the OpenAPI JSON for programmatic access
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    app.with_state(state)
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Add security headers middleware
        .layer(from_fn(security_headers_middleware))
}
