//! StepExtractor - the main entry point for turning element trees into
//! procedure steps.
//!
//! The root's children are sections (typically lists) and each section's
//! children are steps (typically list items).

use etree_serialize::{serialize_into, Element, Format, SerializeOptions, DEFAULT_MAX_DEPTH};

use crate::ids::{IdSource, UuidIds};
use crate::sentence::title_and_content;
use crate::step::ProcedureStep;
use crate::Result;

/// How step numbers run across sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    /// Restart at 1 in every section
    #[default]
    PerSection,
    /// Count 1..N across the whole tree
    Continuous,
}

/// Options for StepExtractor
#[derive(Debug, Clone)]
pub struct StepOptions {
    /// Step numbering scheme
    pub numbering: Numbering,

    /// Nesting limit when serializing step markup
    pub max_depth: usize,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            numbering: Numbering::PerSection,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main service for extracting procedure steps
pub struct StepExtractor {
    options: StepOptions,
    ids: Box<dyn IdSource>,
}

impl StepExtractor {
    /// Create a StepExtractor with default options and UUID identifiers
    pub fn new() -> Self {
        Self::with_options(StepOptions::default())
    }

    /// Create a StepExtractor with custom options
    pub fn with_options(options: StepOptions) -> Self {
        Self {
            options,
            ids: Box::new(UuidIds),
        }
    }

    /// Replace the identifier source
    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &StepOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut StepOptions {
        &mut self.options
    }

    /// Extract the steps of every section under `root`, in document order
    pub fn extract(&self, root: &Element) -> Result<Vec<ProcedureStep>> {
        let mut steps = Vec::new();

        for section in root.children() {
            for (i, elem) in section.children().enumerate() {
                let n = match self.options.numbering {
                    Numbering::PerSection => i + 1,
                    Numbering::Continuous => steps.len() + 1,
                };
                let step = self.step_from_element(elem, n)?;
                tracing::trace!(n, id = %step.id, title = %step.title, "extracted step");
                steps.push(step);
            }
        }

        tracing::debug!(
            sections = root.len(),
            steps = steps.len(),
            "extracted procedure steps"
        );
        Ok(steps)
    }

    /// Extract steps and encode them as a JSON array
    pub fn to_json(&self, root: &Element) -> Result<String> {
        let steps = self.extract(root)?;
        Ok(serde_json::to_string(&steps)?)
    }

    fn step_from_element(&self, elem: &Element, n: usize) -> Result<ProcedureStep> {
        let step = match elem.children.split_first() {
            // Lead sentence from the first child, the rest kept as markup
            Some((first, rest)) if !rest.is_empty() => {
                let (title, content) = title_and_content(&first.unwrapped_text());
                let markup = self.serialize_children(rest)?;
                ProcedureStep::new(&title, &format!("{content} {markup}"), n, self.ids.next_id())
            }
            _ => {
                let (title, content) = title_and_content(&elem.unwrapped_text());
                ProcedureStep::new(&title, &content, n, self.ids.next_id())
            }
        };
        Ok(step)
    }

    fn serialize_children(&self, children: &[Element]) -> Result<String> {
        let options = SerializeOptions {
            format: Format::Html,
            max_depth: self.options.max_depth,
        };

        let mut markup = String::new();
        for child in children {
            serialize_into(child, &options, &mut markup)?;
        }
        markup.retain(|c| c != '\n');
        Ok(markup)
    }
}

impl Default for StepExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract steps with default options and UUID identifiers
pub fn to_procedure_steps(root: &Element) -> Result<Vec<ProcedureStep>> {
    StepExtractor::new().extract(root)
}

/// Extract steps with default options and encode them as a JSON array
pub fn to_procedure_json(root: &Element) -> Result<String> {
    StepExtractor::new().to_json(root)
}
