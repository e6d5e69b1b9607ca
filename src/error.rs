use std::{error::Error as StdError, time::Duration};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to reach inference server: {}", error_chain(.0))]
    Network(#[from] reqwest::Error),

    #[error("Inference server did not respond within {timeout:?}: {}", error_chain(.source))]
    Timeout {
        timeout: Duration,
        source: reqwest::Error,
    },

    #[error("Inference server returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to decode inference response: {0}")]
    Decode(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Renders an error followed by each of its sources, `outer: inner: root`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Classifies a transport failure, keeping timeouts apart from other
    /// connection errors.
    pub fn transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                timeout,
                source: err,
            }
        } else {
            Self::Network(err)
        }
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}
