//! Configuration loading
//!
//! Coordinates the configuration sources into one validated `CliConfig`.

use crate::primitives::ConfigError;
use tracing::trace;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Files read before argument parsing so `DOCKFLOW_*` values in them reach clap
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` style files; a missing file is not an error
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(path) => trace!(path = %path.display(), "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(())
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load_layered() -> Result<Self, ConfigError> {
        load_env_files()?;
        let cli = CliConfig::load();
        cli.layered(&EnvironmentConfig::load()?)
    }

    /// Fold the parsed CLI config over defaults and the standard environment
    pub fn layered(self, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();
        config.color = env_config.apply_color_config(config.color);

        let mut config = config.merge_with(self.app_config);
        config.validate()?;

        Ok(Self {
            app_config: config,
            command: self.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
