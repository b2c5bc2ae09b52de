//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting files, or stdin when no path (or `-`) is given
//! - Explicit language tags, or detection from the file extension
//! - Standalone HTML pages with an embedded theme stylesheet
//! - Listing themes and saving the preferred one to the config file

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::syntax::LanguageId;

/// Highlight TypeScript, HTML and CSS snippets as HTML
#[derive(Parser, Debug)]
#[command(name = "hilite", version, about = "Highlight code snippets as HTML")]
pub struct CliArgs {
    /// Files to highlight (`-` or nothing reads stdin)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Language tag: ts, html or css (unknown tags mean ts)
    #[arg(short = 'l', long = "lang", value_name = "TAG")]
    pub lang: Option<String>,

    /// Emit a complete HTML document with an embedded stylesheet
    #[arg(long)]
    pub page: bool,

    /// Theme id used for --page (defaults to the configured theme)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Save ID as the configured theme and exit
    #[arg(long, value_name = "ID", conflicts_with = "list_themes")]
    pub set_theme: Option<String>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Files(Vec<PathBuf>),
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListThemes,
    SetTheme(String),
    Highlight,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    pub input: InputSource,
    /// Explicit `--lang`, overriding extension detection
    pub language: Option<LanguageId>,
    pub page: bool,
    pub theme: Option<String>,
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let action = match (self.list_themes, self.set_theme) {
            (true, Some(_)) => {
                return Err("--list-themes and --set-theme are exclusive".to_string())
            }
            (true, None) => Action::ListThemes,
            (false, Some(id)) if id.trim().is_empty() => {
                return Err("--set-theme needs a theme id".to_string())
            }
            (false, Some(id)) => Action::SetTheme(id.trim().to_string()),
            (false, None) => Action::Highlight,
        };

        let reads_stdin = self.paths.iter().any(|p| p.as_os_str() == "-");
        let input = if self.paths.is_empty() {
            InputSource::Stdin
        } else if reads_stdin {
            if self.paths.len() > 1 {
                return Err("Cannot mix stdin (-) with file paths".to_string());
            }
            InputSource::Stdin
        } else {
            InputSource::Files(self.paths)
        };

        Ok(RunConfig {
            action,
            input,
            language: self.lang.as_deref().map(LanguageId::from_tag),
            page: self.page,
            theme: self.theme,
            output: self.output,
        })
    }
}

impl RunConfig {
    /// Language for one input: `--lang`, then extension, then `fallback`
    pub fn language_for(&self, path: Option<&Path>, fallback: LanguageId) -> LanguageId {
        self.language
            .or_else(|| path.and_then(LanguageId::from_path))
            .unwrap_or(fallback)
    }
}
