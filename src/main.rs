use anyhow::{Context, Result};
use axum_monitor::{create_router, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present, then initialize tracing to stdout
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let app = create_router()?;

    let endpoint = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&endpoint)
        .await
        .with_context(|| format!("failed to bind {endpoint}"))?;

    info!("App listening on port {}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
