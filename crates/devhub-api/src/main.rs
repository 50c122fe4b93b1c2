//! DevHub API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p devhub-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use devhub_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Pretty logs in development, JSON elsewhere
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting DevHub API Server"
    );

    devhub_api::run(config).await?;

    Ok(())
}
