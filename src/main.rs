use anyhow::Result;
use chat_translate_relay::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chat_translate_relay=info".parse()?)
        )
        .init();

    info!("Starting chat translation relay");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    server::serve(config).await
}
