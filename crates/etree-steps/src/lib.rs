//! # etree-steps
//!
//! Turn element trees into checklist-style procedure steps.
//!
//! Each child of the root is a section and each child of a section is a
//! step. A step's first sentence becomes its title; the remaining text,
//! plus any trailing markup serialized as HTML, becomes its content.
//!
//! ## Example
//!
//! ```rust
//! use etree_steps::{Element, SequentialIds, StepExtractor};
//!
//! let item = Element::new("li")
//!     .with_child(Element::new("p").with_text("Ask questions: What is your name?"));
//! let root = Element::new("div").with_child(Element::new("ol").with_child(item));
//!
//! let extractor = StepExtractor::new().with_ids(SequentialIds::new());
//! let steps = extractor.extract(&root).unwrap();
//! assert_eq!(steps[0].title, "Ask questions");
//! assert_eq!(steps[0].content, "What is your name?");
//! assert_eq!(steps[0].id, "step-1");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use etree_steps::{parse_html, to_procedure_json};
//!
//! let root = parse_html("<ol><li><p>Greet. Sit down.</p></li></ol>");
//! let json = to_procedure_json(&root).unwrap();
//! assert!(json.contains(r#""title":"Greet.""#));
//! ```

mod extract;
#[cfg(feature = "html")]
pub mod html;
mod ids;
mod sentence;
mod step;

pub use etree_serialize::{
    serialize, serialize_into, to_html_string, to_xhtml_string, Element, Format, QName,
    SerializeOptions, Tag, Value,
};
pub use extract::{to_procedure_json, to_procedure_steps, Numbering, StepExtractor, StepOptions};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use sentence::{split_sentences, title_and_content};
pub use step::{ProcedureStep, StepKind};

/// Error type for step extraction
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Serialize(#[from] etree_serialize::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StepError>;
