//! dockflow primitives - core types and errors
//!
//! Shared types that the rest of the crate builds on: log settings drive the
//! logger, config errors surface from every loading stage, and the color
//! intent feeds both logging and CLI output.

use clap::ValueEnum;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// Multi-line human readable output
    /// alias: pretty, yaml, yml
    Pretty,
}

/// Color output intent, resolved against the terminal at logger init
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorIntent {
    /// Let the terminal decide
    /// alias: auto, automatic, detect, default
    #[value(alias = "automatic", alias = "detect", alias = "default")]
    Auto,

    /// Always emit ANSI colors
    /// alias: always, force, on
    #[value(alias = "force", alias = "on")]
    Always,

    /// Never emit ANSI colors
    /// alias: never, off
    #[value(alias = "off")]
    Never,
}

impl ColorIntent {
    /// Resolve the intent to a yes/no answer for the given stream
    pub fn resolve(&self, output: LogOutput) -> bool {
        match self {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => {
                let term = match output {
                    LogOutput::Stderr => console::Term::stderr(),
                    LogOutput::Stdout => console::Term::stdout(),
                };
                term.features().colors_supported()
            }
        }
    }
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub ansi: bool,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Invalid command line: {source}")]
    InvalidArguments {
        #[from]
        source: clap::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive name understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug")),
            Self::Trace => Some(
                clap::builder::PossibleValue::new("trace")
                    .alias("verbose"),
            ),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Pretty]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Pretty => Some(
                clap::builder::PossibleValue::new("pretty")
                    .alias("yaml")
                    .alias("yml"),
            ),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorIntent, "invalid color intent");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
