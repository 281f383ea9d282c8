//! HTML parsing support.
//!
//! This module builds element trees from HTML strings, mapping DOM text
//! nodes onto the element `text`/`tail` layout.

use etree_serialize::Element;
use scraper::{ElementRef, Html, Node as ScraperNode};

/// Parse an HTML string into a fragment-rooted element tree.
///
/// # Example
///
/// ```rust
/// use etree_steps::{parse_html, to_html_string};
///
/// let root = parse_html("<p>Hello <em>World</em>!</p>");
/// assert_eq!(to_html_string(&root).unwrap(), "<p>Hello <em>World</em>!</p>");
/// ```
pub fn parse_html(html: &str) -> Element {
    let document = Html::parse_fragment(html);
    let mut root = Element::fragment();
    append_children(document.root_element(), &mut root);
    root
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef) -> Element {
    let mut elem = Element::new(element.value().name());
    for (key, value) in element.value().attrs() {
        elem.set_attr(key, value);
    }
    append_children(element, &mut elem);
    elem
}

fn append_children(element: ElementRef, parent: &mut Element) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => push_text(parent, &text.text),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    parent.add_child(scraper_to_element(child_element));
                }
            }
            ScraperNode::Comment(comment) => parent.add_child(Element::comment(&comment.comment)),
            _ => {}
        }
    }
}

/// Text before the first child is the parent's text, later text is the
/// tail of the preceding child.
fn push_text(parent: &mut Element, text: &str) {
    let slot = match parent.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut parent.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}
