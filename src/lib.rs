//! hilite - placeholder-protected snippet highlighting
//!
//! This crate turns short TypeScript, HTML and CSS snippets into escaped
//! markup with style classes on comments, strings, decorators, keywords and
//! tag names, plus the themes, configuration and CLI plumbing around it.
//!
//! ```
//! use hilite::{highlight, LanguageId};
//!
//! let html = highlight("const n = signal(0);", LanguageId::TypeScript);
//! assert!(html.starts_with("<b class=\"kw\">const</b>"));
//! ```

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod page;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::HiliteConfig;
pub use syntax::{highlight, highlight_tag, HighlightKind, Highlighter, LanguageId};
pub use theme::Theme;
