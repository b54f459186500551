//! Output settings shared by the project and global configuration files.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Never use colors
    Never,
    /// Color only when the stream is a terminal
    #[default]
    Auto,
}

/// Which standard stream receives the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum OutputStream {
    #[default]
    Stderr,
    Stdout,
}

/// Shape of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored human-readable banners
    #[default]
    Console,
    /// One JSON object per line
    Json,
    /// Events forwarded to the `tracing` subscriber
    Tracing,
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            other => Err(invalid("output.color", "'always', 'never', or 'auto'", other)),
        }
    }
}

impl FromStr for OutputStream {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Ok(OutputStream::Stderr),
            "stdout" => Ok(OutputStream::Stdout),
            other => Err(invalid("output.stream", "'stderr' or 'stdout'", other)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "tracing" => Ok(OutputFormat::Tracing),
            other => Err(invalid(
                "output.format",
                "'console', 'json', or 'tracing'",
                other,
            )),
        }
    }
}

// Config files accept the same spellings as the environment variables
impl TryFrom<String> for ColorMode {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for OutputStream {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.parse()
    }
}

fn invalid(field: &str, allowed: &str, got: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: format!("must be {}, got '{}'", allowed, got),
    }
}

/// `[output]` table as written in a configuration file
///
/// Every field is optional so that partial files can be layered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Color mode (default: auto)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,

    /// Target stream (default: stderr)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<OutputStream>,

    /// Report format (default: console)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    /// Merge another output table into this one
    /// Other config takes precedence for non-None values
    pub fn merge(&mut self, other: &OutputConfig) {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.stream.is_some() {
            self.stream = other.stream;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
    }
}
