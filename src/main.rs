use anyhow::{Context, Result};
use ollama_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG`, falling back to the configured level.
/// Accepts full directive syntax such as `ollama_relay=debug,tower_http=info`.
fn log_filter(rust_log: Option<String>, configured_level: &str) -> Result<(String, EnvFilter)> {
    let directives = rust_log.unwrap_or_else(|| configured_level.to_string());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: '{}'", directives))?;
    Ok((directives, filter))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet, so startup failures go to stderr
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (directives, filter) =
        match log_filter(std::env::var("RUST_LOG").ok(), &config.server.logs.level) {
            Ok(parts) => parts,
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(1);
            }
        };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting Ollama relay with log filter: {}", directives);

    server::run(config).await?;

    Ok(())
}
