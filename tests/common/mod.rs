// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum_monitor::create_router;
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

// ============================================================================
// Test Setup
// ============================================================================

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // ---

        // Each server gets its own router and therefore its own metrics
        // registry, so tests never observe each other's traffic.
        let app = create_router().expect("Should be able to create router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// Fetch `/metrics` and return the exposition text.
    pub async fn scrape(&self) -> String {
        // ---
        let res = self
            .client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("metrics request should succeed");
        assert!(res.status().is_success());
        res.text().await.expect("metrics body should be text")
    }
}
