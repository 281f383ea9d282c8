//! Character escaping for text and attribute values.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a character or entity reference at the start of the input,
/// without the leading `&`.
static ENTITY_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:#[0-9]+|#x[0-9a-f]+|[0-9a-z]+);").unwrap());

/// Void (self-closing) HTML elements
pub const HTML_EMPTY: &[&str] = &[
    "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input",
    "isindex", "link", "meta", "param",
];

/// Elements whose text is emitted without escaping
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    HTML_EMPTY.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag's text passes through unescaped
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Replace `&` with `&amp;` unless it already starts an entity reference
fn escape_amp(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for (i, _) in text.match_indices('&') {
        result.push_str(&text[last..i]);
        if ENTITY_REF.is_match(&text[i + 1..]) {
            result.push('&');
        } else {
            result.push_str("&amp;");
        }
        last = i + 1;
    }
    result.push_str(&text[last..]);
    Cow::Owned(result)
}

fn replace<'a>(text: Cow<'a, str>, from: char, to: &str) -> Cow<'a, str> {
    if text.contains(from) {
        Cow::Owned(text.replace(from, to))
    } else {
        text
    }
}

/// Escape character data (element text, tails, comment bodies)
pub fn escape_cdata(text: &str) -> Cow<'_, str> {
    // & first so the inserted entities are left alone
    let text = escape_amp(text);
    let text = replace(text, '<', "&lt;");
    replace(text, '>', "&gt;")
}

/// Escape an attribute value for single-line output
pub fn escape_attrib(text: &str) -> Cow<'_, str> {
    let text = escape_cdata(text);
    let text = replace(text, '"', "&quot;");
    replace(text, '\n', "&#10;")
}

/// Escape an attribute value for HTML output; newlines stay literal
pub fn escape_attrib_html(text: &str) -> Cow<'_, str> {
    let text = escape_cdata(text);
    replace(text, '"', "&quot;")
}
