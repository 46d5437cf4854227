//! Markdown rendering for message display
//!
//! Converts CommonMark message bodies to HTML. Pure function of its input:
//! the same source always produces the same HTML.

use pulldown_cmark::{html, Options, Parser};

/// Convert a markdown string to HTML.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 2);
    html::push_html(&mut output, parser);
    output
}
