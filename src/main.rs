use anyhow::Result;
use taltos_site::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taltos_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting Táltos Lovasudvar website");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Environment: {}", config.environment);

    // Validates the route table; an invalid table aborts startup
    let state = server::AppState::new(config)?;
    info!("✓ Route table validated");

    server::serve(state).await
}
