//! Procedure step records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminator written as the step's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    #[default]
    Content,
}

/// One instruction of a checklist-style procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureStep {
    pub title: String,

    /// 1-based position of the step
    pub n: usize,

    pub id: String,

    /// Reserved; always empty
    pub files: Vec<Value>,
    /// Reserved; always empty
    pub fields: Vec<Value>,
    /// Reserved; always empty
    pub images: Vec<Value>,

    #[serde(rename = "type")]
    pub kind: StepKind,

    pub content: String,
}

impl ProcedureStep {
    /// Build a content step; title and content are trimmed
    pub fn new(title: &str, content: &str, n: usize, id: String) -> Self {
        Self {
            title: title.trim().to_string(),
            n,
            id,
            files: Vec::new(),
            fields: Vec::new(),
            images: Vec::new(),
            kind: StepKind::Content,
            content: content.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let step = ProcedureStep::new("  Title \n", " body ", 2, "abc".to_string());
        assert_eq!(step.title, "Title");
        assert_eq!(step.content, "body");
        assert_eq!(step.n, 2);
        assert_eq!(step.kind, StepKind::Content);
        assert!(step.files.is_empty() && step.fields.is_empty() && step.images.is_empty());
    }

    #[test]
    fn test_json_field_order() {
        let step = ProcedureStep::new("Greet", "Say hi.", 1, "id-1".to_string());
        assert_eq!(
            serde_json::to_string(&step).unwrap(),
            r#"{"title":"Greet","n":1,"id":"id-1","files":[],"fields":[],"images":[],"type":"content","content":"Say hi."}"#
        );
    }

    #[test]
    fn test_json_read_back() {
        let text = r#"{"title":"A","n":3,"id":"x","files":[],"fields":[],"images":[],"type":"content","content":"B"}"#;
        let step: ProcedureStep = serde_json::from_str(text).unwrap();
        assert_eq!(step, ProcedureStep::new("A", "B", 3, "x".to_string()));
    }
}
