use anyhow::Result;
use awards_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("awards_site=info".parse()?),
        )
        .init();

    info!("Starting awards site preview server");

    let config = config::Config::from_env()?;
    server::serve(&config).await
}
