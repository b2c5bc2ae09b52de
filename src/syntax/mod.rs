//! Syntax highlighting module
//!
//! Regex-driven highlighting of short, hand-authored snippets with:
//! - Language tags and extension detection
//! - Markup escaping before any styling
//! - Placeholder-protected passes so spans never nest
//!
//! ## Pipeline
//!
//! ```text
//! source → escape → pass 1 → … → pass n → restore placeholders → markup
//! ```
//!
//! ## Profiles
//!
//! - TypeScript (default): comments, strings, decorators, reserved words
//! - HTML: comments, attribute values, binding markers, tag names
//! - CSS: comments, strings, property names (single scan)

mod escape;
mod highlighter;
mod highlights;
mod languages;
mod placeholder;

pub use escape::{escape_html, plain_text, unescape_html};
pub use highlighter::{highlight, highlight_tag, Highlighter};
pub use highlights::{HighlightKind, DEFAULT_KEYWORDS, HIGHLIGHT_NAMES};
pub use languages::LanguageId;
pub use placeholder::{PlaceholderTable, SENTINEL};
