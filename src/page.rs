//! HTML output for highlighted snippets
//!
//! Wraps highlighter markup in code blocks and, optionally, a standalone
//! document with the theme stylesheet inlined.

use crate::syntax::{escape_html, LanguageId};
use crate::theme::Theme;

/// CSS selector of the code block element
pub const BLOCK_SCOPE: &str = "pre.hilite";

/// One highlighted snippet ready for rendering
#[derive(Debug, Clone)]
pub struct Block {
    /// Optional caption, usually the file name
    pub title: Option<String>,
    pub language: LanguageId,
    /// Output of the highlighter
    pub markup: String,
}

/// `<pre class="hilite">` element for one block
pub fn render_block(block: &Block) -> String {
    let mut out = String::with_capacity(block.markup.len() + 96);
    if let Some(title) = &block.title {
        out.push_str("<figcaption>");
        out.push_str(&escape_html(title));
        out.push_str("</figcaption>\n");
    }
    out.push_str(&format!(
        "<pre class=\"hilite\" data-lang=\"{}\"><code>",
        block.language.tag()
    ));
    out.push_str(&block.markup);
    out.push_str("</code></pre>\n");
    out
}

/// Complete HTML document containing every block
pub fn render_page(blocks: &[Block], theme: &Theme) -> String {
    let body: String = blocks.iter().map(render_block).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
body {{
    margin: 0 auto;
    max-width: 960px;
    padding: 20px;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
}}

{scope} {{
    padding: 16px;
    border-radius: 6px;
    overflow: auto;
    font-family: "SF Mono", Menlo, Consolas, monospace;
    font-size: 13px;
    line-height: 1.5;
}}

{stylesheet}    </style>
</head>
<body>
{body}</body>
</html>
"#,
        scope = BLOCK_SCOPE,
        stylesheet = theme.stylesheet(BLOCK_SCOPE),
        body = body,
    )
}
