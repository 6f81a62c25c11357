use axum_monitor::{create_router, GREETING};

mod common;

#[tokio::test]
async fn basic_integration_test() {
    // ---
    // Test that the router can be created successfully
    let _router = create_router().expect("Should be able to create router");
}

#[tokio::test]
async fn root_endpoint_returns_exact_greeting() {
    // ---
    let server = common::TestServer::new().await;

    let response = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, GREETING);
}

#[tokio::test]
async fn root_greeting_is_independent_of_metrics_state() {
    // ---
    let server = common::TestServer::new().await;

    // Generate some traffic first; the greeting must not change.
    for _ in 0..5 {
        let _ = server.client.get(server.url("/metrics")).send().await;
    }

    let response = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING);
}

#[tokio::test]
async fn invalid_routes_return_404() {
    // ---
    let server = common::TestServer::new().await;

    let response = server
        .client
        .get(server.url("/nonexistent"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn server_handles_concurrent_requests() {
    // ---
    let server = common::TestServer::new().await;

    // Make multiple concurrent requests
    let futures = (0..10).map(|_| server.client.get(server.url("/")).send());

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for response in responses {
        let response = response.expect("Request should succeed");
        assert_eq!(response.status(), 200);
    }
}
