//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::output::{ColorMode, OutputConfig, OutputFormat, OutputStream};
use crate::project::ProjectConfig;
use crate::{ConfigError, ConfigResult, PROJECT_CONFIG_FILE};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding `output.color`
pub const ENV_COLOR: &str = "UNITKIT_COLOR";
/// Environment variable overriding `output.stream`
pub const ENV_STREAM: &str = "UNITKIT_STREAM";
/// Environment variable overriding `output.format`
pub const ENV_FORMAT: &str = "UNITKIT_FORMAT";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.unitkit/config.toml) - lowest priority
/// 2. Project config (./unitkit.toml) - overrides global
/// 3. Environment variables (UNITKIT_*) - overrides project
/// 4. Caller adjustments on [`Config`] - highest priority
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Fully resolved output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedOutput {
    pub color: ColorMode,
    pub stream: OutputStream,
    pub format: OutputFormat,
}

/// Merged configuration result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Effective output settings
    pub output: ResolvedOutput,

    /// Directory where unitkit.toml was found
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Use an explicit global config path instead of ~/.unitkit/config.toml
    pub fn with_global_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find unitkit.toml, then layers it over
    /// the global config and applies environment overrides.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        self.resolve(project_root, project_config)
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_root = config_path.parent().map(|p| p.to_path_buf());
        self.resolve(project_root, project_config)
    }

    fn resolve(
        &mut self,
        project_root: Option<PathBuf>,
        project_config: ProjectConfig,
    ) -> ConfigResult<Config> {
        let mut merged = self.load_global_config()?;
        merged.merge(&project_config);

        let mut output = merged.output.unwrap_or_default();
        apply_env_overrides(&mut output)?;

        Ok(Config {
            output: ResolvedOutput {
                color: output.color.unwrap_or_default(),
                stream: output.stream.unwrap_or_default(),
                format: output.format.unwrap_or_default(),
            },
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config); a missing file yields defaults
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Load global configuration from ~/.unitkit/config.toml
    fn load_global_config(&mut self) -> ConfigResult<ProjectConfig> {
        if self.global_config_path.is_none() {
            match Self::global_config_path() {
                Ok(path) => self.global_config_path = Some(path),
                // No home directory means no global layer
                Err(ConfigError::HomeNotFound) => return Ok(ProjectConfig::default()),
                Err(e) => return Err(e),
            }
        }

        match &self.global_config_path {
            Some(path) if path.exists() => ProjectConfig::load_from_file(path),
            _ => Ok(ProjectConfig::default()),
        }
    }

    /// Get the global config file path (~/.unitkit/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".unitkit").join("config.toml"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply UNITKIT_* environment variable overrides
fn apply_env_overrides(output: &mut OutputConfig) -> ConfigResult<()> {
    if let Ok(color) = env::var(ENV_COLOR) {
        output.color = Some(color.parse()?);
    }
    if let Ok(stream) = env::var(ENV_STREAM) {
        output.stream = Some(stream.parse()?);
    }
    if let Ok(format) = env::var(ENV_FORMAT) {
        output.format = Some(format.parse()?);
    }
    Ok(())
}

impl Config {
    /// Check if a unitkit.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Override the color mode (e.g. from a `--no-color` flag)
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.output.color = color;
        self
    }

    /// Override the report format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}
