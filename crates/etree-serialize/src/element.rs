//! Element tree model
//!
//! This module defines the tree consumed by the serializer and the step
//! extractor. It follows the ElementTree text/tail layout:
//!
//! - **text**: character data after the opening tag, before the first child
//! - **tail**: character data after the closing tag, before the next sibling
//!
//! ```text
//! <p>TEXT<em>inner</em>TAIL</p>
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{Error, Result};

/// A name bound to an XML namespace, written `{namespace-uri}local`.
///
/// Decoded once when the tree is built; the serializer never re-parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    /// A name with no namespace part
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Decode `{uri}local` or a bare `local`.
    ///
    /// A leading `{` without a matching `}` is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let Some(rest) = text.strip_prefix('{') else {
            return Ok(Self::local(text));
        };
        match rest.split_once('}') {
            Some((namespace, local)) => Ok(Self::new(namespace, local)),
            None => Err(Error::MalformedQualifiedName(text.to_string())),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// The kind of node an element represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Ordinary element such as `p` or `li`
    Name(String),
    /// Namespaced element; serialized with an `xmlns` attribute
    Qualified(QName),
    /// `<!-- text -->`
    Comment,
    /// `<? text ?>`
    ProcessingInstruction,
    /// Wrapper with no markup of its own; only text and children are emitted
    Fragment,
}

/// An attribute key or value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Str(String),
    QName(QName),
}

impl Value {
    /// Text used for ordering and output. Qualified names reduce to their
    /// local part.
    pub fn as_text(&self) -> &str {
        match self {
            Value::Str(s) => s,
            Value::QName(q) => &q.local,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<QName> for Value {
    fn from(value: QName) -> Self {
        Value::QName(value)
    }
}

/// A node of the element tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub attributes: IndexMap<Value, Value>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an ordinary element
    pub fn new(tag: &str) -> Self {
        Self::with_tag(Tag::Name(tag.to_string()))
    }

    /// Create a namespaced element
    pub fn qualified(name: QName) -> Self {
        Self::with_tag(Tag::Qualified(name))
    }

    pub fn comment(text: &str) -> Self {
        Self::with_tag(Tag::Comment).with_text(text)
    }

    pub fn processing_instruction(text: &str) -> Self {
        Self::with_tag(Tag::ProcessingInstruction).with_text(text)
    }

    /// Create a tagless wrapper
    pub fn fragment() -> Self {
        Self::with_tag(Tag::Fragment)
    }

    pub fn with_tag(tag: Tag) -> Self {
        Self {
            tag,
            text: None,
            tail: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_tail(mut self, tail: &str) -> Self {
        self.tail = Some(tail.to_string());
        self
    }

    pub fn with_attr(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute, replacing any previous value for the key
    pub fn set_attr(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Look up a plain-string attribute key
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(&Value::Str(key.to_string()))
    }

    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Tag name for ordinary and qualified elements
    pub fn name(&self) -> Option<&str> {
        match &self.tag {
            Tag::Name(name) => Some(name),
            Tag::Qualified(q) => Some(&q.local),
            _ => None,
        }
    }

    /// Text of this element if it has any non-blank text, otherwise the
    /// concatenated unwrapped text of its children in document order.
    ///
    /// Tails are not part of the result.
    pub fn unwrapped_text(&self) -> String {
        let mut out = String::new();
        self.push_unwrapped_text(&mut out);
        out
    }

    fn push_unwrapped_text(&self, out: &mut String) {
        match &self.text {
            Some(text) if !text.trim().is_empty() => out.push_str(text),
            _ => {
                for child in &self.children {
                    child.push_unwrapped_text(out);
                }
            }
        }
    }
}
