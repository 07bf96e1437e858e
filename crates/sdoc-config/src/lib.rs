//! Configuration management for sdoc.
//!
//! Parses `sdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The config seeds one classification run: the namespace prefix, the
//! caller-supplied group titles (raw keys may be namespaced or nested; the
//! normalizer expands them), and display options passed through to the
//! rendering collaborator.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sdoc_model::GroupRegistry;
use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sdoc.toml";

/// Fallback registry entry for items documented without a group label.
const DEFAULT_GROUP: (&str, &str) = ("undefined", "General");

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace prefix stripped from group labels (empty disables stripping).
    pub namespace: String,
    /// Seed group titles, keyed by raw label.
    pub groups: IndexMap<String, String>,
    /// Display options for the rendering collaborator.
    pub display: DisplayConfig,
    /// Favicon URL for the rendered site.
    pub shortcut_icon: String,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            groups: IndexMap::new(),
            display: DisplayConfig::default(),
            shortcut_icon: "http://sass-lang.com/favicon.ico".to_owned(),
            config_path: None,
        }
    }
}

/// Display options consumed by the rendering collaborator.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Access levels to render.
    pub access: Vec<String>,
    /// Whether aliased definitions are rendered.
    pub alias: bool,
    /// Whether the generator watermark is rendered.
    pub watermark: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            access: vec!["public".to_owned(), "private".to_owned()],
            alias: false,
            watermark: true,
        }
    }
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

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sdoc.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, if
    /// parsing fails, or if validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
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
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.contains('.') {
            return Err(ConfigError::Validation(
                "namespace cannot contain '.'".to_owned(),
            ));
        }
        if self.display.access.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "display.access entries cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Build the seed registry for a classification run.
    ///
    /// User-configured titles override the built-in `undefined -> General`
    /// fallback; the fallback entry keeps its leading position either way.
    #[must_use]
    pub fn seed_registry(&self) -> GroupRegistry {
        let mut entries = IndexMap::new();
        entries.insert(DEFAULT_GROUP.0.to_owned(), DEFAULT_GROUP.1.to_owned());
        for (slug, title) in &self.groups {
            entries.insert(slug.clone(), title.clone());
        }
        entries.into_iter().collect()
    }
}
