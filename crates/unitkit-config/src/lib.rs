//! unitkit Configuration
//!
//! Resolves how a test program reports its results:
//! - Project configuration (unitkit.toml)
//! - Global user configuration (~/.unitkit/config.toml)
//! - Environment overrides (UNITKIT_*)
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.unitkit/config.toml)
//! 2. Project config (./unitkit.toml, searched upwards)
//! 3. Environment variables (UNITKIT_COLOR, UNITKIT_STREAM, UNITKIT_FORMAT)
//! 4. Values set by the caller on the resulting [`Config`]
//!
//! # Example
//!
//! ```no_run
//! use unitkit_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("{:?}", config.output.color);
//! ```

pub mod loader;
pub mod output;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Name of the project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = "unitkit.toml";

// Re-export main types
pub use loader::{Config, ConfigLoader, ResolvedOutput};
pub use output::{ColorMode, OutputConfig, OutputFormat, OutputStream};
pub use project::ProjectConfig;
