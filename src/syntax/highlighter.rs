//! Snippet highlighter
//!
//! Turns a source snippet into markup: the text is escaped first, then an
//! ordered list of pattern passes for the selected profile wraps recognized
//! spans in `<em class=..>`/`<b class=..>` elements.
//!
//! The TypeScript and HTML profiles protect every span they produce with a
//! placeholder (see [`PlaceholderTable`]), so later passes never re-match
//! earlier markup. Comments and strings are recognized by one leftmost-first
//! scan: whichever opens first owns the text, so `"// x"` stays a string and
//! `// "x"` stays a comment.
//!
//! The CSS profile is a single non-overlapping scan with no placeholders.
//! It is deliberately one combined scan rather than three sequential
//! substitutions: a later string rule would otherwise re-match the `"cm"`
//! attribute of comment markup.
//!
//! Decorator, binding, tag-name and property patterns use ASCII word
//! characters; only the keyword boundary `\b` is Unicode-aware.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use super::escape::{escape_html, ENTITY_WORDS};
use super::highlights::{HighlightKind, DEFAULT_KEYWORDS};
use super::languages::LanguageId;
use super::placeholder::PlaceholderTable;

// TypeScript profile

static TS_COMMENT_OR_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<comment>//[^\n]*)",
        r#"|(?P<string>'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|`(?:[^`\\]|\\.)*`)"#,
    ))
    .expect("ts comment/string pattern is valid")
});

static TS_DECORATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z][A-Za-z0-9_]*").expect("decorator pattern is valid"));

// HTML profile

static HTML_COMMENT_OR_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<comment>&lt;!--(?s:.*?)--&gt;)|(?P<string>"[^"]*")"#)
        .expect("html comment/string pattern is valid")
});

/// `[prop]`, `(event)`, `[(two-way)]`, `[[x]]`, `((x))`
static HTML_BINDING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[{1,2}[A-Za-z0-9_.()]+\]{1,2}|\({1,2}[A-Za-z0-9_.()]+\){1,2}")
        .expect("binding pattern is valid")
});

static HTML_TAG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<open>&lt;/?)(?P<name>[A-Za-z0-9_-]+)").expect("tag name pattern is valid")
});

// CSS profile

static CSS_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<comment>/\*(?s:.*?)\*/)",
        r#"|(?P<string>"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#,
        r"|(?P<property>[A-Za-z0-9_-]+)(?P<gap>\s*):(?P<pseudo>:?)",
    ))
    .expect("css token pattern is valid")
});

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(Highlighter::new);

/// Compiled size budget for the keyword alternation, sized for sets of
/// around a hundred thousand custom words
const KEYWORD_PATTERN_SIZE_LIMIT: usize = 256 << 20;

/// Highlight `code` with the given profile and the default keyword set
pub fn highlight(code: &str, language: LanguageId) -> String {
    DEFAULT_HIGHLIGHTER.highlight(code, language)
}

/// Highlight `code` for an optional language tag.
///
/// Absent or unrecognized tags use the TypeScript profile.
pub fn highlight_tag(code: &str, tag: Option<&str>) -> String {
    DEFAULT_HIGHLIGHTER.highlight_tag(code, tag)
}

/// Highlighter with a configurable reserved-word set.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: Vec<String>,
    /// Whole-word alternation over `keywords`, `None` when the set is empty
    keyword_pattern: Option<Regex>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Highlighter using [`DEFAULT_KEYWORDS`]
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS.iter().copied())
    }

    /// Highlighter using exactly the given reserved words.
    ///
    /// Words that are not plain identifiers (letters, digits, `_`, no
    /// leading digit) or that spell an escape entity body such as `amp`
    /// are skipped with a warning. A set too large to compile is replaced
    /// by [`DEFAULT_KEYWORDS`], and [`keywords`](Self::keywords) reports the
    /// replacement.
    pub fn with_keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if is_identifier(word) && !ENTITY_WORDS.contains(&word) {
                keywords.push(word.to_string());
            } else {
                tracing::warn!(word, "ignoring reserved word that cannot be matched safely");
            }
        }
        keywords.sort();
        keywords.dedup();

        let keyword_pattern = match build_keyword_pattern(&keywords) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!(
                    count = keywords.len(),
                    "Keyword set too large, using the default keywords: {}",
                    e
                );
                keywords = DEFAULT_KEYWORDS.iter().map(|w| w.to_string()).collect();
                keywords.sort();
                build_keyword_pattern(&keywords).ok().flatten()
            }
        };
        Self {
            keywords,
            keyword_pattern,
        }
    }

    /// Highlighter using [`DEFAULT_KEYWORDS`] plus `extra`
    pub fn with_extra_keywords<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = DEFAULT_KEYWORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra.into_iter().map(|w| w.as_ref().to_string()))
            .collect();
        Self::with_keywords(words)
    }

    /// Reserved words of the TypeScript profile, sorted
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn highlight_tag(&self, code: &str, tag: Option<&str>) -> String {
        self.highlight(code, LanguageId::from_optional_tag(tag))
    }

    /// Escape `code` and apply the passes of `language`
    pub fn highlight(&self, code: &str, language: LanguageId) -> String {
        if code.is_empty() {
            return String::new();
        }

        tracing::debug!(
            %language,
            bytes = code.len(),
            placeholders = language.uses_placeholders(),
            "highlighting snippet"
        );

        let escaped = escape_html(code);
        match language {
            LanguageId::TypeScript => self.highlight_typescript(&escaped),
            LanguageId::Html => highlight_html(&escaped),
            LanguageId::Css => highlight_css(&escaped),
        }
    }

    fn highlight_typescript(&self, escaped: &str) -> String {
        let mut table = PlaceholderTable::new();

        let text = run_pass("comments+strings", escaped, &TS_COMMENT_OR_STRING, |caps| {
            table.hold(comment_or_string(caps).wrap(&caps[0]))
        });
        let text = run_pass("decorators", &text, &TS_DECORATOR, |caps| {
            table.hold(HighlightKind::Decorator.wrap(&caps[0]))
        });
        let text = match &self.keyword_pattern {
            Some(pattern) => run_pass("keywords", &text, pattern, |caps| {
                table.hold(HighlightKind::Keyword.wrap(&caps[0]))
            }),
            None => text,
        };

        table.restore(&text)
    }
}

fn highlight_html(escaped: &str) -> String {
    let mut table = PlaceholderTable::new();

    let text = run_pass("comments+strings", escaped, &HTML_COMMENT_OR_STRING, |caps| {
        table.hold(comment_or_string(caps).wrap(&caps[0]))
    });
    let text = run_pass("bindings", &text, &HTML_BINDING, |caps| {
        table.hold(HighlightKind::Decorator.wrap(&caps[0]))
    });
    // Only the name is styled; the escaped bracket stays outside the span
    let text = run_pass("tag names", &text, &HTML_TAG_NAME, |caps| {
        let name = table.hold(HighlightKind::TagName.wrap(&caps["name"]));
        format!("{}{}", &caps["open"], name)
    });

    table.restore(&text)
}

fn highlight_css(escaped: &str) -> String {
    run_pass("css", escaped, &CSS_TOKEN, |caps| {
        if caps.name("comment").is_some() {
            return HighlightKind::Comment.wrap(&caps[0]);
        }
        if caps.name("string").is_some() {
            return HighlightKind::String.wrap(&caps[0]);
        }
        if !caps["pseudo"].is_empty() {
            // `a::before` is a pseudo-element, not a declaration
            return caps[0].to_string();
        }
        format!(
            "{}{}:",
            HighlightKind::Keyword.wrap(&caps["property"]),
            &caps["gap"]
        )
    })
}

/// Apply one pass: replace every match of `pattern` with `render`'s output
fn run_pass<F>(name: &'static str, text: &str, pattern: &Regex, mut render: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut hits = 0usize;
    let out = pattern.replace_all(text, |caps: &Captures<'_>| {
        hits += 1;
        render(caps)
    });
    tracing::trace!(pass = name, hits, "pass complete");
    out.into_owned()
}

fn comment_or_string(caps: &Captures<'_>) -> HighlightKind {
    if caps.name("comment").is_some() {
        HighlightKind::Comment
    } else {
        HighlightKind::String
    }
}

/// Letters, digits and `_`, not starting with a digit. A leading digit
/// would let the keyword pass match inside a placeholder index.
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whole-word alternation over `keywords`, `None` for an empty set
fn build_keyword_pattern(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    if keywords.is_empty() {
        return Ok(None);
    }
    let alternation = keywords
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
        .size_limit(KEYWORD_PATTERN_SIZE_LIMIT)
        .dfa_size_limit(KEYWORD_PATTERN_SIZE_LIMIT)
        .build()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        for lang in LanguageId::ALL {
            assert_eq!(highlight("", lang), "");
        }
    }

    #[test]
    fn test_keyword_and_decorator() {
        assert_eq!(
            highlight("@Component export class A {}", LanguageId::TypeScript),
            "<b class=\"dc\">@Component</b> <b class=\"kw\">export</b> \
             <b class=\"kw\">class</b> A {}"
        );
    }

    #[test]
    fn test_comment_shadows_keywords() {
        assert_eq!(
            highlight("// return early", LanguageId::TypeScript),
            "<em class=\"cm\">// return early</em>"
        );
    }

    #[test]
    fn test_string_shadows_comment_marker() {
        assert_eq!(
            highlight("\"// not a comment\"", LanguageId::TypeScript),
            "<em class=\"s\">\"// not a comment\"</em>"
        );
    }

    #[test]
    fn test_custom_keywords() {
        let hl = Highlighter::with_keywords(["fn", "let", "fn", "not a word", "", "0", "amp", "lt"]);
        assert_eq!(hl.keywords(), &["fn".to_string(), "let".to_string()]);
        assert_eq!(
            hl.highlight("fn main() { const x }", LanguageId::TypeScript),
            "<b class=\"kw\">fn</b> main() { const x }"
        );
    }

    #[test]
    fn test_extra_keywords_extend_defaults() {
        let hl = Highlighter::with_extra_keywords(["model"]);
        let out = hl.highlight("const m = model()", LanguageId::TypeScript);
        assert!(out.contains("<b class=\"kw\">const</b>"));
        assert!(out.contains("<b class=\"kw\">model</b>"));
    }

    #[test]
    fn test_entities_are_never_split_by_keywords() {
        let hl = Highlighter::with_keywords(["amp", "gt", "if"]);
        assert_eq!(
            hl.highlight("a && b > c if", LanguageId::TypeScript),
            "a &amp;&amp; b &gt; c <b class=\"kw\">if</b>"
        );
    }

    #[test]
    fn test_huge_keyword_set_still_highlights() {
        let extra: Vec<String> = (0..100_000).map(|i| format!("generated_{i}")).collect();
        let hl = Highlighter::with_extra_keywords(&extra);
        assert_eq!(hl.keywords().len(), extra.len() + DEFAULT_KEYWORDS.len());
        assert_eq!(
            hl.highlight("return x", LanguageId::TypeScript),
            "<b class=\"kw\">return</b> x"
        );

        // Every listed keyword is one the pattern actually matches
        let keywords = hl.keywords();
        let last = keywords.len() - 1;
        for word in [&keywords[0], &keywords[last / 2], &keywords[last]] {
            assert_eq!(
                hl.highlight(word, LanguageId::TypeScript),
                format!("<b class=\"kw\">{word}</b>")
            );
        }
    }

    #[test]
    fn test_empty_keyword_set_disables_keyword_pass() {
        let hl = Highlighter::with_keywords(Vec::<String>::new());
        assert_eq!(hl.highlight("return x", LanguageId::TypeScript), "return x");
    }

    #[test]
    fn test_html_tag_name_only() {
        assert_eq!(
            highlight("</span>", LanguageId::Html),
            "&lt;/<b class=\"fn\">span</b>&gt;"
        );
    }

    #[test]
    fn test_name_patterns_are_ascii() {
        assert_eq!(highlight("<é>", LanguageId::Html), "&lt;é&gt;");
        assert_eq!(highlight("[é]", LanguageId::Html), "[é]");
        assert_eq!(
            highlight("<p-1>", LanguageId::Html),
            "&lt;<b class=\"fn\">p-1</b>&gt;"
        );
        assert_eq!(highlight("é: x", LanguageId::Css), "é: x");
    }

    #[test]
    fn test_css_gap_kept_outside_span() {
        assert_eq!(
            highlight("color :red", LanguageId::Css),
            "<b class=\"kw\">color</b> :red"
        );
    }
}
