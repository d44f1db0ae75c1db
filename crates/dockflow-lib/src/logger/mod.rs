use crate::primitives::*;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Crates from the HTTP stack that stay at `warn` whatever the requested level
const QUIET_DEPENDENCIES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "tower", "mio", "want"];

/// Logger backed by a global `tracing` subscriber
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Initialize the global logger; `RUST_LOG` overrides the configured level
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::filter_directives(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi = config.ansi,
            "Logger initialized"
        );

        GLOBAL_LOGGER.get_or_init(|| Logger { config });
        Self::global().ok_or(LoggerError::AlreadyInitialized)
    }

    /// Default `EnvFilter` directives for a level
    pub fn filter_directives(level: LogLevel) -> String {
        let level = level.as_directive();
        let mut directives = vec![format!("dockflow={}", level), format!("dockflow_lib={}", level)];
        directives.extend(QUIET_DEPENDENCIES.iter().map(|krate| format!("{}=warn", krate)));
        directives.push(level.to_string());
        directives.join(",")
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    /// Configuration the global logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
