use anyhow::Result;
use listing_enricher::{api, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Classification API listening on {}", config.bind_addr());

    axum::serve(listener, api::router()).await?;
    Ok(())
}
