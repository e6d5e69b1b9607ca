mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the process configuration once at startup.
///
/// The YAML file at `CONFIG_PATH` (or `config.yaml`) is read first, then
/// `PORT`, `OLLAMA_URL` and `OLLAMA_MODEL` override whatever it set.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();

    let mut config = read_file(explicit_path.as_deref()).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Reads `path`, or `config.yaml` when no path is given. A missing default
/// file just means "use defaults"; a missing explicit file is an error.
pub async fn read_file(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound && path.is_none() => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(Error::config(format!("Failed to read {}: {}", config_path, e))),
    }
}

impl Config {
    /// Applies environment-style overrides using `lookup` to resolve each key.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        if let Some(base_url) = lookup("OLLAMA_URL") {
            self.ollama.base_url = base_url;
        }

        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.ollama.model = model;
        }

        Ok(())
    }
}
