// Main entry point for the research web UI

use anyhow::{Context, Result};
use research_core::{kernel::ResearchDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,research_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AI Sales Research");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, reports will use the fallback text");
    }
    tracing::info!(
        template = %config.docx_template_path.display(),
        search = %config.search_base_url,
        "Configuration loaded"
    );

    let deps = ResearchDeps::from_config(&config).context("Failed to build dependencies")?;
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
