//! Placeholder protection for multi-pass highlighting
//!
//! A styling pass never splices its markup into the working text. It stores
//! the rendered fragment here and substitutes a token
//! `SENTINEL <decimal index> SENTINEL`. Later passes only ever see the token,
//! which none of their patterns can match, so markup such as the `class`
//! attribute of an earlier wrapper is never re-styled.
//!
//! ## Sentinel choice
//!
//! The sentinel is U+FDD0, the first Unicode noncharacter. Noncharacters are
//! reserved for process-internal use and never occur in interchanged text,
//! and [`escape_html`](super::escape::escape_html) additionally rewrites a
//! literal U+FDD0 to `&#xFDD0;`. Escaped text therefore cannot contain the
//! sentinel, and tokens cannot be forged from input.
//!
//! A table lives for exactly one highlight call.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Brackets the fragment index of a placeholder token
pub const SENTINEL: char = '\u{FDD0}';

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x{FDD0}(\d+)\x{FDD0}").expect("placeholder token pattern is valid")
});

/// Ordered store of rendered fragments for one highlight call
#[derive(Debug, Default)]
pub struct PlaceholderTable {
    fragments: Vec<String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `fragment` and return the token that stands in for it
    pub fn hold(&mut self, fragment: String) -> String {
        debug_assert!(
            !fragment.contains(SENTINEL),
            "fragments must not contain placeholder tokens"
        );
        let index = self.fragments.len();
        self.fragments.push(fragment);
        format!("{SENTINEL}{index}{SENTINEL}")
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replace every token in `text` with its fragment, in a single pass.
    ///
    /// Consumes the table; each fragment is restored exactly once.
    pub fn restore(mut self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        TOKEN
            .replace_all(text, |caps: &Captures<'_>| {
                let fragment = caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get_mut(index));
                match fragment {
                    Some(fragment) => std::mem::take(fragment),
                    None => {
                        tracing::warn!(token = &caps[0], "unknown placeholder left in place");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}
