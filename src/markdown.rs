//! Recipe Text Formatting
//!
//! - Instruction steps: `**bold**`, line breaks and the backend's bullet
//!   glyph turned into inline HTML
//! - Recipe notes: full markdown via pulldown-cmark, raw HTML shown as text

use std::sync::OnceLock;

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};
use regex::Regex;

const BULLET_HTML: &str = r#"<span class="instruction-bullet">&bull; </span>"#;

/// Bullet sequences the backend puts in front of sub-steps. The second one is
/// the same glyph after a UTF-8/Latin-1 mix-up on the server.
const BULLETS: &[&str] = &["  • ", "  â€¢ "];

static BOLD: OnceLock<Regex> = OnceLock::new();

fn bold_re() -> &'static Regex {
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"))
}

/// Instruction step -> HTML for `inner_html`
pub fn format_instruction(instruction: &str) -> String {
    let escaped = escape_html(instruction);
    let mut html = bold_re().replace_all(&escaped, "<strong>$1</strong>").replace('\n', "<br>");
    for bullet in BULLETS {
        html = html.replace(bullet, BULLET_HTML);
    }
    html
}

/// Recipe notes -> HTML
pub fn render_notes(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS);
    let events = parser.map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(CowStr::from(html.into_string())),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
