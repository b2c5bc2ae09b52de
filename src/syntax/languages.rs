//! Language identification and detection
//!
//! Maps language tags and file extensions to one of the three highlighting
//! profiles. Anything unrecognized falls back to the TypeScript profile.

use std::path::Path;

/// Supported highlighting profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    /// C-family / TypeScript-like code
    #[default]
    TypeScript,
    /// HTML templates, including framework binding attributes
    Html,
    /// CSS declarations
    Css,
}

impl LanguageId {
    /// All profiles, in a stable order
    pub const ALL: [LanguageId; 3] = [LanguageId::TypeScript, LanguageId::Html, LanguageId::Css];

    /// Resolve a language tag such as `"ts"`, `"html"` or `"css-like"`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unknown tags resolve to [`LanguageId::TypeScript`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "html" | "htm" | "html-like" => LanguageId::Html,
            "css" | "css-like" => LanguageId::Css,
            // "ts", "typescript", "ts-like", "js", ... and everything else
            _ => LanguageId::TypeScript,
        }
    }

    /// Resolve an optional tag, defaulting to TypeScript when absent
    pub fn from_optional_tag(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or_default()
    }

    /// Detect language from file extension, if it is one we know
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ts" | "tsx" | "mts" | "cts" | "js" | "jsx" | "mjs" | "cjs" => {
                Some(LanguageId::TypeScript)
            }
            "html" | "htm" => Some(LanguageId::Html),
            "css" => Some(LanguageId::Css),
            _ => None,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical short tag, accepted back by [`LanguageId::from_tag`]
    pub fn tag(&self) -> &'static str {
        match self {
            LanguageId::TypeScript => "ts",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
        }
    }

    /// Whether this profile protects its spans with placeholders
    pub fn uses_placeholders(&self) -> bool {
        !matches!(self, LanguageId::Css)
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
