//! Highlight categories and span markup
//!
//! Defines the style categories a pass can assign, how a span is rendered
//! as markup, and the reserved words of the TypeScript profile.

/// Capture names, indexed by [`HighlightKind::index`]
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "comment",   // line, block and HTML comments
    "string",    // quoted literals and attribute values
    "decorator", // @Decorators and [binding]/(event) markers
    "keyword",   // reserved words, CSS property names
    "tag",       // HTML tag names
];

/// Reserved words of the TypeScript profile, including the reactive-state
/// primitives (`signal`, `computed`, `effect`, `inject`).
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "import",
    "export",
    "from",
    "default",
    "class",
    "const",
    "let",
    "var",
    "new",
    "return",
    "if",
    "else",
    "for",
    "of",
    "in",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "function",
    "async",
    "await",
    "extends",
    "implements",
    "interface",
    "type",
    "enum",
    "abstract",
    "public",
    "private",
    "protected",
    "readonly",
    "static",
    "override",
    "true",
    "false",
    "null",
    "undefined",
    "void",
    "inject",
    "signal",
    "computed",
    "effect",
];

/// Style category of a recognized span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    String,
    /// Decorators and template binding markers
    Decorator,
    /// Reserved words and CSS property names
    Keyword,
    /// HTML tag names
    TagName,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 5] = [
        HighlightKind::Comment,
        HighlightKind::String,
        HighlightKind::Decorator,
        HighlightKind::Keyword,
        HighlightKind::TagName,
    ];

    /// Index into [`HIGHLIGHT_NAMES`]
    pub fn index(self) -> usize {
        match self {
            HighlightKind::Comment => 0,
            HighlightKind::String => 1,
            HighlightKind::Decorator => 2,
            HighlightKind::Keyword => 3,
            HighlightKind::TagName => 4,
        }
    }

    pub fn name(self) -> &'static str {
        HIGHLIGHT_NAMES[self.index()]
    }

    /// CSS class attached to the wrapper element
    pub fn class_name(self) -> &'static str {
        match self {
            HighlightKind::Comment => "cm",
            HighlightKind::String => "s",
            HighlightKind::Decorator => "dc",
            HighlightKind::Keyword => "kw",
            HighlightKind::TagName => "fn",
        }
    }

    /// Wrapper element: `em` for text-like spans, `b` for markers
    pub fn element(self) -> &'static str {
        match self {
            HighlightKind::Comment | HighlightKind::String => "em",
            HighlightKind::Decorator | HighlightKind::Keyword | HighlightKind::TagName => "b",
        }
    }

    /// Look up a kind by capture name.
    ///
    /// Hierarchical names fall back to their parents, so
    /// `"keyword.control.import"` resolves to [`HighlightKind::Keyword`].
    /// `"tag_name"` and `"tag-name"` are accepted as aliases of `"tag"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut current = name;
        loop {
            if let Some(kind) = Self::from_exact_name(current) {
                return Some(kind);
            }

            let Some(dot_pos) = current.rfind('.') else {
                break;
            };
            current = &current[..dot_pos];
        }

        None
    }

    fn from_exact_name(name: &str) -> Option<Self> {
        if matches!(name, "tag_name" | "tag-name") {
            return Some(HighlightKind::TagName);
        }
        HIGHLIGHT_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|pos| Self::ALL[pos])
    }

    /// Render an already-escaped piece of text as a span of this kind
    pub fn wrap(self, escaped: &str) -> String {
        let element = self.element();
        let class = self.class_name();
        let mut out =
            String::with_capacity(escaped.len() + 2 * element.len() + class.len() + 14);
        out.push('<');
        out.push_str(element);
        out.push_str(" class=\"");
        out.push_str(class);
        out.push_str("\">");
        out.push_str(escaped);
        out.push_str("</");
        out.push_str(element);
        out.push('>');
        out
    }
}
