use anyhow::Context;
use shelfseek::api::create_router;
use shelfseek::config::CONFIG;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let app = create_router(&CONFIG);

    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Server started on port {}", CONFIG.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
