//! Markup escaping
//!
//! Escaping always runs before any styling pass, so wrapper markup inserted
//! later is never escaped a second time.

use super::placeholder::SENTINEL;

/// Entity used for a literal [`SENTINEL`] in source text
pub const SENTINEL_ENTITY: &str = "&#xFDD0;";

/// Word-like bodies of the entities `escape_html` emits
pub(crate) const ENTITY_WORDS: &[&str] = &["amp", "lt", "gt", "xFDD0"];

/// Escape `&`, `<`, `>` and the placeholder sentinel.
///
/// Equivalent to replacing `&` first and `<`/`>` afterwards, so the entities
/// produced for angle brackets are never re-escaped.
pub fn escape_html(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 8);
    for ch in source.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            SENTINEL => out.push_str(SENTINEL_ENTITY),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the entities produced by [`escape_html`]
pub fn unescape_html(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            (SENTINEL_ENTITY, SENTINEL),
        ]
        .into_iter()
        .find(|(entity, _)| rest.starts_with(entity));

        match decoded {
            Some((entity, ch)) => {
                out.push(ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Recover the original source text from highlighted markup.
///
/// Drops every `<...>` wrapper tag and decodes the escaping entities. Only
/// meaningful for output of the highlighter, where every literal `<` has
/// been escaped.
pub fn plain_text(markup: &str) -> String {
    let mut stripped = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    unescape_html(&stripped)
}
