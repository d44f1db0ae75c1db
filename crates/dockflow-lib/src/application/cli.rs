use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// dockflow CLI - service scale and blue/green color in Consul
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "dockflow")]
#[command(about = "Read and write docker-flow scale and color keys in Consul")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process arguments, exiting on `--help` or bad input
    pub fn load() -> Self {
        Cli::parse().into()
    }

    /// Parse an explicit argument list
    pub fn try_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }
}

/// Available dockflow commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the replica count to deploy with
    Scale {
        /// Service name
        service: String,

        /// New scale: N, +N or -N (defaults to the stored value)
        #[arg(allow_hyphen_values = true)]
        delta: Option<String>,

        /// Store the calculated scale
        #[arg(short, long)]
        write: bool,
    },

    /// Print the currently active color
    Color {
        /// Service name
        service: String,
    },

    /// Print the color the next deployment should use
    NextColor {
        /// Service name
        service: String,

        /// Store the next color as the active one
        #[arg(short, long)]
        write: bool,
    },

    /// Store a scale value
    PutScale {
        /// Service name
        service: String,

        /// Replica count
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        value: u32,
    },

    /// Store a color value
    PutColor {
        /// Service name
        service: String,

        /// Color, normally blue or green
        value: String,
    },
}

impl Commands {
    /// Service the command operates on
    pub fn service(&self) -> &str {
        match self {
            Commands::Scale { service, .. }
            | Commands::Color { service }
            | Commands::NextColor { service, .. }
            | Commands::PutScale { service, .. }
            | Commands::PutColor { service, .. } => service,
        }
    }

    /// Whether the command writes to the store
    pub fn writes(&self) -> bool {
        match self {
            Commands::Scale { write, .. } | Commands::NextColor { write, .. } => *write,
            Commands::Color { .. } => false,
            Commands::PutScale { .. } | Commands::PutColor { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
