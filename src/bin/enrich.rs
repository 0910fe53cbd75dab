use anyhow::Result;
use listing_enricher::{
    config::Config,
    enrichment::{EnrichError, Enricher, default_output_path},
};
use std::path::PathBuf;
use tracing::{error, info};

const DEFAULT_INPUT: &str = "trulia_listings.csv";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input));

    info!(
        "Enriching {} -> {} (lookup service: {}, delay: {:?})",
        input.display(),
        output.display(),
        config.owner_lookup_url(),
        config.enrich_delay()
    );

    let enricher = Enricher::from_config(&config);
    match enricher.enrich_file(&input, &output).await {
        Ok(stats) => {
            info!("Done: {}", stats);
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Err(e @ EnrichError::InputNotFound(_)) => {
            error!("{}", e);
            Err(e.into())
        }
        Err(e) => {
            error!("Enrichment failed: {}", e);
            Err(e.into())
        }
    }
}
