//! Configuration persistence
//!
//! Stores user preferences in `~/.config/hilite/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::syntax::{Highlighter, LanguageId};

/// Configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiliteConfig {
    /// Selected theme id (e.g., "dark", "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Language tag used when none is given and the extension is unknown
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Words highlighted as keywords in addition to the builtin set
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    LanguageId::default().tag().to_string()
}

impl Default for HiliteConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_language: default_language(),
            extra_keywords: Vec::new(),
        }
    }
}

impl HiliteConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Select `theme_id` and persist the whole config to `path`
    pub fn set_theme(&mut self, theme_id: &str, path: &Path) -> Result<(), String> {
        let previous = std::mem::replace(&mut self.theme, theme_id.to_string());
        if let Err(e) = self.save_to(path) {
            self.theme = previous;
            return Err(e);
        }
        tracing::info!("Theme set to {}", theme_id);
        Ok(())
    }

    /// Profile used when nothing more specific is known
    pub fn default_language(&self) -> LanguageId {
        LanguageId::from_tag(&self.default_language)
    }

    /// Highlighter with the builtin keywords plus `extra_keywords`
    pub fn highlighter(&self) -> Highlighter {
        if self.extra_keywords.is_empty() {
            Highlighter::new()
        } else {
            Highlighter::with_extra_keywords(&self.extra_keywords)
        }
    }
}
