use anyhow::Result;
use tracing_subscriber::EnvFilter;

use venus_market_tags::config::Settings;
use venus_market_tags::fetch_market_tags;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let s = Settings::from_env()?;
    tracing::info!(chain_id = %s.chain_id, "collecting market tags");

    let tags = fetch_market_tags(&s.chain_id, &s.subgraph_api_key).await?;
    tracing::info!(count = tags.len(), "market tags collected");

    let json = serde_json::to_string_pretty(&tags)?;
    match s.output_path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes()).await?;
            tracing::info!(path = %path, "tags written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
