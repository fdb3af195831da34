use adversaryiq::shell::{router, AppState};
use adversaryiq::{ApiClient, Desk, DeskConfig};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging/tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DeskConfig::from_env().context("loading desk configuration")?;
    tracing::info!("AdversaryIQ desk booting, engine at {}", config.api_url);

    let desk = Desk::new(ApiClient::new(&config.api_url), config.timeouts);
    tracing::info!("Engine status: {}", desk.check_health().await);

    let app = router(AppState::new(desk));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!("Desk listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("serving desk")?;
    Ok(())
}
