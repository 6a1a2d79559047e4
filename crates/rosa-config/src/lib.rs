//! Configuration management for Rosa.
//!
//! Parses `rosa.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use rosa_site::{
    CONTAINER_DIRECTORY, DEFAULT_MAX_DEPTH, ImageValidation, MAX_SUPPORTED_DEPTH,
    NavigationProjector, SrcSetBuilder,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the container node type.
    pub container_type: Option<String>,
    /// Override the maximum tree depth.
    pub max_depth: Option<usize>,
    /// Override image URL validation.
    pub image_validation: Option<ImageValidation>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rosa.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation projection configuration.
    pub navigation: NavigationConfig,
    /// Responsive image configuration.
    pub images: ImagesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Navigation projection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Type tag of nodes kept in the navigation.
    pub container_type: String,
    /// Deepest level a content node may sit at (root is 0).
    pub max_depth: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            container_type: CONTAINER_DIRECTORY.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Responsive image configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Whether blank image URLs are rejected.
    pub validation: ImageValidation,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rosa.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied last and validated with the rest.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Projector configured from the `[navigation]` section.
    #[must_use]
    pub fn projector(&self) -> NavigationProjector {
        NavigationProjector::new(
            self.navigation.container_type.clone(),
            self.navigation.max_depth,
        )
    }

    /// Srcset builder configured from the `[images]` section.
    #[must_use]
    pub fn srcset_builder(&self) -> SrcSetBuilder {
        SrcSetBuilder::new(self.images.validation)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(container_type) = &settings.container_type {
            self.navigation.container_type.clone_from(container_type);
        }
        if let Some(max_depth) = settings.max_depth {
            self.navigation.max_depth = max_depth;
        }
        if let Some(validation) = settings.image_validation {
            self.images.validation = validation;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_navigation()
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        require_non_empty(
            &self.navigation.container_type,
            "navigation.container_type",
        )?;

        let max_depth = self.navigation.max_depth;
        if max_depth == 0 {
            return Err(ConfigError::Validation(
                "navigation.max_depth must be greater than 0".to_owned(),
            ));
        }
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::Validation(format!(
                "navigation.max_depth cannot exceed {MAX_SUPPORTED_DEPTH}"
            )));
        }

        Ok(())
    }
}
