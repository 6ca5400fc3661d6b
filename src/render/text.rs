//! Free-text conversion for descriptions and course content.

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use std::sync::OnceLock;

/// Opening tags allowed through `plain` untouched
const INLINE_WHITELIST: &str = concat!(
    r"^<(?:",
    r"a|a\s+href=.*|img|i|em|b|strong|p|u|h[1-6]|ul|ol|li|br|hr|",
    r"code|pre|pre\s+class=.*|table|th|tr|td|sup|sub",
    r")>$"
);

static OPENING_TAG: OnceLock<Regex> = OnceLock::new();
static ALLOWED_TAG: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH: OnceLock<Regex> = OnceLock::new();

/// Compile a literal pattern once
pub(crate) fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("literal pattern compiles"))
}

/// Convert Markdown to HTML
pub fn markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(text, options));
    out
}

/// Convert a short course text to inline HTML
///
/// Opening tags outside the inline whitelist are escaped so they show as
/// text. Every line ends with a hard break, and paragraph tags are removed
/// from the converted output.
pub fn plain(text: &str) -> String {
    let opening = pattern(&OPENING_TAG, r"<[^/ ][^><]*>");
    let allowed = pattern(&ALLOWED_TAG, INLINE_WHITELIST);

    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let line = opening.replace_all(line, |caps: &regex::Captures| {
                let tag = &caps[0];
                if allowed.is_match(tag) {
                    tag.to_string()
                } else {
                    tag.replace('<', "&lt;").replace('>', "&gt;")
                }
            });
            format!("{}  ", line)
        })
        .collect();

    let converted = markdown(&lines.join("\n"));
    pattern(&PARAGRAPH, r"</?p>")
        .replace_all(&converted, "")
        .into_owned()
}
