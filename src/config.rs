//! Assist configuration persistence
//!
//! Stores user preferences in `config.yaml` under
//! [`config_dir`](crate::config_paths::config_dir)

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Cursor sentinel written by the indent engine and stripped by the bracket
/// observer. Must never appear in real text.
pub const DEFAULT_SENTINEL: char = '\u{2622}';

/// One indent level
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Assist configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Whitespace appended per nesting level
    #[serde(default = "default_indent_unit")]
    pub indent_unit: String,

    /// Reserved cursor marker character
    #[serde(default = "default_sentinel")]
    pub sentinel: char,

    /// Insert the matching closer after `(`, `{` and `[`
    #[serde(default = "default_true")]
    pub auto_close_brackets: bool,

    /// Indent the new line on Enter
    #[serde(default = "default_true")]
    pub auto_indent: bool,
}

fn default_indent_unit() -> String {
    DEFAULT_INDENT_UNIT.to_string()
}

fn default_sentinel() -> char {
    DEFAULT_SENTINEL
}

fn default_true() -> bool {
    true
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            indent_unit: default_indent_unit(),
            sentinel: default_sentinel(),
            auto_close_brackets: true,
            auto_indent: true,
        }
    }
}

impl AssistConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Parse and validate config from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the assist pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.indent_unit.chars().all(|c| c == ' ' || c == '\t') {
            bail!(
                "indent_unit must contain only spaces and tabs, got {:?}",
                self.indent_unit
            );
        }
        // Every occurrence in a changed span is deleted, so it must be a
        // symbol nobody types in source code
        let sentinel = self.sentinel;
        if sentinel.is_ascii()
            || sentinel.is_alphanumeric()
            || sentinel.is_whitespace()
            || sentinel.is_control()
        {
            bail!(
                "sentinel must be a non-ASCII symbol that never appears in text, got {:?}",
                sentinel
            );
        }
        Ok(())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
