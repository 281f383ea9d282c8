//! HTML / XHTML serialization
//!
//! Converts an element tree into markup text. Attributes are written in
//! sorted key order so output does not depend on insertion order.

use std::borrow::Cow;

use crate::element::{Element, Tag, Value};
use crate::escape::{escape_attrib, escape_attrib_html, escape_cdata, is_raw_text, is_void};
use crate::options::{Format, SerializeOptions};
use crate::{Error, Result};

/// Serialize an element tree to a markup string
pub fn serialize(element: &Element, options: &SerializeOptions) -> Result<String> {
    tracing::trace!(format = ?options.format, "serializing element tree");
    let mut output = String::with_capacity(1024);
    serialize_into(element, options, &mut output)?;
    Ok(output)
}

/// Serialize an element tree, appending to an existing buffer
pub fn serialize_into(element: &Element, options: &SerializeOptions, out: &mut String) -> Result<()> {
    serialize_element(element, options, 0, out)
}

/// Serialize with `Format::Html` and default options
pub fn to_html_string(element: &Element) -> Result<String> {
    serialize(element, &SerializeOptions::html())
}

/// Serialize with `Format::Xhtml` and default options
pub fn to_xhtml_string(element: &Element) -> Result<String> {
    serialize(element, &SerializeOptions::xhtml())
}

fn serialize_element(
    elem: &Element,
    options: &SerializeOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }

    match &elem.tag {
        Tag::Comment => {
            out.push_str("<!--");
            out.push_str(&escape_cdata(elem.text.as_deref().unwrap_or("")));
            out.push_str("-->");
        }

        Tag::ProcessingInstruction => {
            out.push_str("<?");
            out.push_str(&escape_cdata(elem.text.as_deref().unwrap_or("")));
            out.push_str("?>");
        }

        Tag::Fragment => {
            if let Some(text) = non_empty(&elem.text) {
                out.push_str(&escape_cdata(text));
            }
            serialize_children(elem, options, depth, out)?;
        }

        Tag::Name(name) => serialize_tagged(elem, name, None, options, depth, out)?,

        Tag::Qualified(qname) => {
            let namespace = qname
                .namespace
                .as_deref()
                .ok_or_else(|| Error::MalformedQualifiedName(qname.to_string()))?;
            serialize_tagged(elem, &qname.local, Some(namespace), options, depth, out)?;
        }
    }

    if let Some(tail) = non_empty(&elem.tail) {
        out.push_str(&escape_cdata(tail));
    }

    Ok(())
}

fn serialize_tagged(
    elem: &Element,
    tag: &str,
    namespace: Option<&str>,
    options: &SerializeOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    out.push('<');
    out.push_str(tag);
    serialize_attributes(elem, options.format, out);

    if let Some(uri) = namespace.filter(|uri| !uri.is_empty()) {
        out.push_str(" xmlns=\"");
        out.push_str(&escape_attrib(uri));
        out.push('"');
    }

    let void = is_void(tag);
    if options.format == Format::Xhtml && void {
        out.push_str(" />");
        return Ok(());
    }

    out.push('>');
    if let Some(text) = non_empty(&elem.text) {
        if is_raw_text(tag) {
            out.push_str(text);
        } else {
            out.push_str(&escape_cdata(text));
        }
    }

    serialize_children(elem, options, depth, out)?;

    // html void elements never close, even when they carry children
    if !void {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    Ok(())
}

fn serialize_attributes(elem: &Element, format: Format, out: &mut String) {
    if elem.attributes.is_empty() {
        return;
    }

    let mut items: Vec<(&Value, &Value)> = elem.attributes.iter().collect();
    items.sort_by(|a, b| {
        (a.0.as_text(), a.1.as_text()).cmp(&(b.0.as_text(), b.1.as_text()))
    });

    for (key, value) in items {
        let key = key.as_text();
        let value = match value {
            Value::QName(qname) => Cow::Borrowed(qname.local.as_str()),
            Value::Str(text) => escape_attrib_html(text),
        };

        out.push(' ');
        if format == Format::Html && key == value {
            // boolean attribute, e.g. `checked`
            out.push_str(&value);
        } else {
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&value);
            out.push('"');
        }
    }
}

fn serialize_children(
    elem: &Element,
    options: &SerializeOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    for child in &elem.children {
        serialize_element(child, options, depth + 1, out)?;
    }
    Ok(())
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}
