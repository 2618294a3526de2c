//! Markdown rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to HTML.
///
/// Pure transformation with no sanitization - the rendered body trusts its
/// input, which only authenticated authors can write.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
