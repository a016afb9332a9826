use anyhow::Context;
use moviemood::{CatalogConfig, TmdbCatalog};
use moviemood_server::create_app;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CatalogConfig::from_env().context("catalog configuration")?;
    info!(
        "Using catalog at {} (timeout {:?})",
        config.base_url, config.timeout
    );
    let catalog = Arc::new(TmdbCatalog::new(config)?);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let app = create_app(catalog);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    let addr = listener.local_addr()?;

    info!("MovieMood server is up and running on {}", addr);
    info!("Welcome endpoint: GET http://{}/welcome", addr);
    info!("Chat endpoint: POST http://{}/chat", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
