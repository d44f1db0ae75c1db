use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

/// Errors raised while preparing the HTTP stack
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP client construction failed: {source}")]
    ClientBuildFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid timeout: {seconds}s (must be > 0)")]
    InvalidTimeout { seconds: u64 },
}

/// HTTP client settings shared by every key-value call
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// Enable request/response tracing
    pub trace_requests: bool,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            trace_requests: false,
        }
    }
}

/// Owns the single `reqwest::Client` used for a command run
#[derive(Debug, Clone)]
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        if config.timeout_seconds == 0 {
            return Err(NetworkingError::InvalidTimeout {
                seconds: config.timeout_seconds,
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("dockflow/", env!("CARGO_PKG_VERSION")))
            .build()?;

        trace!(
            timeout_seconds = config.timeout_seconds,
            "Networking manager initialized"
        );

        Ok(Self { client, config })
    }

    /// Get HTTP client for manual requests
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Whether per-request tracing is enabled
    pub fn trace_requests(&self) -> bool {
        self.config.trace_requests
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
