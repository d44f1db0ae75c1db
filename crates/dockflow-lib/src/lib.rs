//! # dockflow Library
//!
//! Scale and blue/green color bookkeeping for docker-flow services, stored in
//! the Consul key-value store.
//!
//! ## Core Modules
//!
//! - [`consul`] - Key-value client: scale calculation, color lookup and writes
//! - [`primitives`] - Shared enums and error types
//! - [`networking`] - HTTP client construction
//! - [`logger`] - Structured logging setup
//! - [`application`] - CLI interface, configuration and command execution
//!
//! ## Quick Start
//!
//! ```no_run
//! use dockflow_lib::consul::{ConsulClient, LiveConsulClient};
//! use dockflow_lib::networking::{NetworkingConfig, NetworkingManager};
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let networking = NetworkingManager::new(NetworkingConfig::default())?;
//! let client = LiveConsulClient::new(Arc::new(networking));
//! let scale = client.get_scale_calc("http://localhost:8500", "api", "+1").await?;
//! client.put_scale("http://localhost:8500", "api", scale).await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod consul;
pub mod logger;
pub mod networking;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use consul::{ConsulClient, ConsulError, LiveConsulClient, MockConsulClient};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;

pub async fn main() -> Result<()> {
    let config = CliConfig::load_layered()?;
    Logger::init(config.app_config.to_logger_config())?;

    execute_command(config).await
}
