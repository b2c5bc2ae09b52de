//! Theme system for highlighted snippets
//!
//! Provides YAML-based themes with compile-time embedded builtins and
//! user-defined themes from the config directory. A theme maps each
//! [`HighlightKind`] to a color and renders a stylesheet for the span classes.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/hilite/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::syntax::HighlightKind;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/hilite/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Hilite Dark")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Some(theme) = load_user_theme(&user_dir, id) {
            return theme;
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Look for `{id}.yaml` or `{id}.yml` in `dir`
pub fn load_user_theme(dir: &Path, id: &str) -> Option<Result<Theme, String>> {
    ["yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", id, ext)))
        .find(|path| path.exists())
        .map(|path| {
            tracing::info!("Loading user theme from {}", path.display());
            from_file(&path)
        })
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let user_dir = crate::config_paths::themes_dir();
    list_themes_in(user_dir.as_deref())
}

/// Same as [`list_available_themes`], with an explicit user theme directory
pub fn list_themes_in(user_dir: Option<&Path>) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = user_dir {
        if let Ok(entries) = std::fs::read_dir(user_dir) {
            let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            paths.sort();
            for path in paths {
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = extract_theme_name(&path).unwrap_or_else(|| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Extract theme name from YAML file without full parsing
fn extract_theme_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(value) = trimmed.strip_prefix("name:") {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(..)` otherwise
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub code: CodeThemeData,
    /// Capture name → hex color; names resolve like `HighlightKind::from_name`
    #[serde(default)]
    pub syntax: HashMap<String, String>,
}

/// Code block colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct CodeThemeData {
    pub background: String,
    pub foreground: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    /// Indexed by [`HighlightKind::index`]
    syntax: [Color; 5],
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    ///
    /// Kinds without a color inherit the foreground.
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let background = Color::from_hex(&data.code.background)?;
        let foreground = Color::from_hex(&data.code.foreground)?;

        let mut syntax = [foreground; 5];
        for (name, hex) in &data.syntax {
            match HighlightKind::from_name(name) {
                Some(kind) => syntax[kind.index()] = Color::from_hex(hex)?,
                None => tracing::warn!("Unknown syntax color '{}' in theme {}", name, data.name),
            }
        }

        Ok(Theme {
            name: data.name,
            background,
            foreground,
            syntax,
        })
    }

    /// Color used for spans of `kind`
    pub fn color(&self, kind: HighlightKind) -> Color {
        self.syntax[kind.index()]
    }

    /// CSS rules for a code block element matching `scope` (e.g. `pre.hilite`)
    pub fn stylesheet(&self, scope: &str) -> String {
        let mut css = String::new();
        let _ = writeln!(
            css,
            "{} {{ background: {}; color: {}; }}",
            scope,
            self.background.to_css(),
            self.foreground.to_css()
        );
        for kind in HighlightKind::ALL {
            let style = match kind {
                HighlightKind::Comment => "font-style: italic;",
                HighlightKind::String => "font-style: normal;",
                _ => "font-weight: 600;",
            };
            let _ = writeln!(
                css,
                "{} {}.{} {{ color: {}; {} }}",
                scope,
                kind.element(),
                kind.class_name(),
                self.color(kind).to_css(),
                style
            );
        }
        css
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                // Hardcoded fallback if YAML parsing fails
                Theme {
                    name: "Hilite Dark".to_string(),
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                    syntax: [
                        Color::rgb(0x6A, 0x99, 0x55),
                        Color::rgb(0xCE, 0x91, 0x78),
                        Color::rgb(0xDC, 0xDC, 0xAA),
                        Color::rgb(0x56, 0x9C, 0xD6),
                        Color::rgb(0x4E, 0xC9, 0xB0),
                    ],
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
