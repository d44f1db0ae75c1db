//! Application layer modules
//!
//! CLI interface, layered configuration, and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

pub use cli::{Cli, CliConfig, Commands};
pub use commands::{execute_command, execute_command_with_client};
pub use config::AppConfig;
