//! Markdown to HTML for the report pane.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render report markdown. Raw HTML in the report is shown as text.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
