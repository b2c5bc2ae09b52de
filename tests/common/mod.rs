//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use hilite::syntax::plain_text;
use hilite::{highlight, HighlightKind, LanguageId};

pub const TS_SAMPLE: &str = include_str!("../../samples/snippets/counter.component.ts");
pub const HTML_SAMPLE: &str = include_str!("../../samples/snippets/task-card.html");
pub const CSS_SAMPLE: &str = include_str!("../../samples/snippets/theme.css");

pub fn ts(code: &str) -> String {
    highlight(code, LanguageId::TypeScript)
}

pub fn html(code: &str) -> String {
    highlight(code, LanguageId::Html)
}

pub fn css(code: &str) -> String {
    highlight(code, LanguageId::Css)
}

/// Opening tag of a span, e.g. `<b class="kw">`
pub fn open_tag(kind: HighlightKind) -> String {
    format!("<{} class=\"{}\">", kind.element(), kind.class_name())
}

/// Number of spans of `kind` in `markup`
pub fn count_spans(markup: &str, kind: HighlightKind) -> usize {
    markup.matches(&open_tag(kind)).count()
}

/// Contents of every span of `kind`, in order
pub fn spans(markup: &str, kind: HighlightKind) -> Vec<String> {
    let open = open_tag(kind);
    let close = format!("</{}>", kind.element());
    let mut found = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(&open) {
        rest = &rest[start + open.len()..];
        let Some(end) = rest.find(&close) else {
            break;
        };
        found.push(rest[..end].to_string());
        rest = &rest[end + close.len()..];
    }
    found
}

/// Text outside wrapper tags, still escaped
pub fn text_outside_tags(markup: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Panic unless `markup` decodes back to `source` exactly
pub fn assert_round_trip(source: &str, language: LanguageId) {
    let markup = highlight(source, language);
    assert_eq!(
        plain_text(&markup),
        source,
        "{} markup lost or changed text:\n{}",
        language.display_name(),
        markup
    );
}

/// Panic if any raw `<`, `>` or unknown `&` survives outside wrapper tags
pub fn assert_escaped(markup: &str) {
    let text = text_outside_tags(markup);
    assert!(!text.contains('<'), "raw '<' in {:?}", markup);
    assert!(!text.contains('>'), "raw '>' in {:?}", markup);
    for (pos, _) in text.match_indices('&') {
        let rest = &text[pos..];
        assert!(
            ["&amp;", "&lt;", "&gt;", "&#xFDD0;"]
                .iter()
                .any(|entity| rest.starts_with(entity)),
            "raw '&' at {} in {:?}",
            pos,
            markup
        );
    }
}
