//! etree-serialize - element tree model and HTML/XHTML serialization
//!
//! This crate provides the element tree consumed by `etree-steps` and the
//! serializer that turns it back into markup. Trees use the ElementTree
//! text/tail layout and are built by an external parser (for example a
//! markdown-to-tree pipeline).
//!
//! # Architecture
//!
//! ```text
//! JSON / parser ──▶ ┌──────────────┐ ──▶ HTML / XHTML String
//!                   │ Element tree │
//!                   └──────────────┘ ──▶ etree-steps
//! ```
//!
//! # Example
//!
//! ```rust
//! use etree_serialize::{to_html_string, to_xhtml_string, Element};
//!
//! let p = Element::new("p")
//!     .with_text("Line one")
//!     .with_child(Element::new("br").with_tail("Line two & more"));
//!
//! assert_eq!(to_html_string(&p).unwrap(), "<p>Line one<br>Line two &amp; more</p>");
//! assert_eq!(to_xhtml_string(&p).unwrap(), "<p>Line one<br />Line two &amp; more</p>");
//! ```

mod element;
mod escape;
mod json;
mod options;
mod serialize;

pub use element::{Element, QName, Tag, Value};
pub use escape::{
    escape_attrib, escape_attrib_html, escape_cdata, is_raw_text, is_void, HTML_EMPTY,
    RAW_TEXT_ELEMENTS,
};
pub use json::{COMMENT_TAG, PI_TAG};
pub use options::{Format, SerializeOptions, DEFAULT_MAX_DEPTH};
pub use serialize::{serialize, serialize_into, to_html_string, to_xhtml_string};

/// Error type for tree serialization
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot serialize {value} (type {type_name})")]
    Serialization {
        value: String,
        type_name: &'static str,
    },

    #[error("QName objects must define a namespace: {0}")]
    MalformedQualifiedName(String),

    #[error("element tree nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
