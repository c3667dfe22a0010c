use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::format::{FormatOptions, TemplateNotFoundError, find_closest_template};
use crate::log::LogLevel;

/// A named template loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    /// The template text, e.g. `"%s rolls %d"`
    pub template: String,
    /// Short human description shown by `config list`
    #[serde(default)]
    pub description: Option<String>,
}

/// Global settings.
///
/// Every field is optional so that override files only replace what they
/// set; the accessors supply defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Nesting limit for best-effort value rendering
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Minimum level written by the logger
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    /// Prefix log lines with an RFC 3339 timestamp
    #[serde(default)]
    pub timestamps: Option<bool>,
}

impl Settings {
    pub fn format_options(&self) -> FormatOptions {
        let mut options = FormatOptions::default();
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        options
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps.unwrap_or(true)
    }

    fn merge(&mut self, other: Settings) {
        self.max_depth = other.max_depth.or(self.max_depth);
        self.log_level = other.log_level.or(self.log_level);
        self.timestamps = other.timestamps.or(self.timestamps);
    }
}

/// Named templates plus settings, loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct TemplateRegistry {
    /// Map of template names to their configurations
    #[serde(default)]
    pub templates: HashMap<String, TemplateConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl TemplateRegistry {
    /// Parses a registry from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in templates bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../templates.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads a registry from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the registry with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in templates (from library)
    /// 2. `~/.config/tmplfmt/templates.toml` (user overrides)
    /// 3. `./templates.toml` (project-local overrides)
    ///
    /// Later files override earlier ones for matching template names and for
    /// any setting they set. Files that fail to parse are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("tmplfmt").join("templates.toml");
            config.merge_file_if_present(&user_config_path);
        }

        config.merge_file_if_present(Path::new("templates.toml"));

        Ok(config)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(path = %path.display(), "merged template overrides");
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable template config");
            }
        }
    }

    /// Merges another registry into this one.
    ///
    /// Templates from `other` replace templates with the same name in `self`.
    pub fn merge(&mut self, other: TemplateRegistry) {
        self.templates.extend(other.templates);
        self.settings.merge(other.settings);
    }

    /// Retrieves a template configuration by name.
    pub fn get_template(&self, name: &str) -> Option<&TemplateConfig> {
        self.templates.get(name)
    }

    /// Like [`get_template`](Self::get_template), with a "did you mean"
    /// suggestion on failure.
    pub fn resolve(&self, name: &str) -> Result<&TemplateConfig, TemplateNotFoundError> {
        self.get_template(name).ok_or_else(|| {
            let available: Vec<String> = self.templates.keys().cloned().collect();
            TemplateNotFoundError::new(name, find_closest_template(name, &available))
        })
    }

    /// Template names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
