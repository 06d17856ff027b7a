//! Shared helpers for the integration test suite.

#![allow(dead_code)]

use std::sync::Once;

use race_winners_service::config::ServiceConfig;
use race_winners_service::services::init_metrics;
use race_winners_service::startup::Application;

// Initialize metrics once for all tests
static INIT_METRICS: Once = Once::new();

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on a random local port.
    pub async fn spawn() -> Self {
        INIT_METRICS.call_once(init_metrics);

        let mut config = ServiceConfig::from_env().expect("Failed to load configuration");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        // The listener is already bound, so requests sent from this point on
        // are queued until the server task starts accepting.
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
