//! Application configuration management
//!
//! Config values follow the precedence: defaults -> .env -> env vars -> CLI args.

use crate::networking::NetworkingConfig;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;

/// Default configuration values, as clap sees them
pub mod defaults {
    pub const CONSUL_ADDRESS: &str = "http://localhost:8500";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const NET_TIMEOUT: &str = "30";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Typed defaults matching [`defaults`]
mod default_fns {
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn consul_address() -> String {
        super::defaults::CONSUL_ADDRESS.to_string()
    }

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn net_timeout() -> u64 {
        30
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Consul address used as the key-value base URL
    #[arg(long, env = "DOCKFLOW_CONSUL_ADDRESS", default_value = defaults::CONSUL_ADDRESS)]
    #[serde(default = "default_fns::consul_address")]
    pub consul_address: String,

    /// Request timeout in seconds
    #[arg(short, long, env = "DOCKFLOW_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DOCKFLOW_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "DOCKFLOW_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DOCKFLOW_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DOCKFLOW_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            consul_address: default_fns::consul_address(),
            net_timeout: default_fns::net_timeout(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.resolve(self.log_output),
        }
    }

    pub fn to_networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            timeout_seconds: self.net_timeout,
            trace_requests: LogLevel::from_verbosity(self.log_level) >= LogLevel::Trace,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.consul_address != default_fns::consul_address() {
            self.consul_address = other.consul_address;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let address = self.consul_address.trim();
        if address.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "consul address must not be empty".to_string(),
            });
        }
        self.consul_address = address.trim_end_matches('/').to_string();

        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net timeout must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
