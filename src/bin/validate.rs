use anyhow::{Context, Result};
use listing_enricher::{
    config::Config,
    platform::{self, Platform},
    validation::ValidationClient,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .context("usage: validate <URL> [EXPECTED_PLATFORM]")?;
    let expected = args
        .next()
        .map(|id| id.parse::<Platform>())
        .transpose()?;

    match platform::detect(&url) {
        Some(p) => info!("Local detection: {} ({})", p.display_name(), p),
        None => info!("Local detection: no known platform"),
    }

    let client = ValidationClient::new(config.validation_backend_url());
    let result = client.validate_and_detect(&url, expected).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_valid {
        std::process::exit(1);
    }
    Ok(())
}
