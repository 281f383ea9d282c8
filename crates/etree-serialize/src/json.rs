//! Building element trees from JSON.
//!
//! Trees produced outside Rust arrive as untyped JSON. This is where
//! non-string text, tails and attribute values are rejected, so the
//! serializer itself only ever sees strings.
//!
//! ```json
//! {
//!   "tag": "p",
//!   "text": "Hello ",
//!   "attributes": {"class": "lead", "{urn:x}ref": {"qname": "{urn:x}id"}},
//!   "children": [{"tag": "em", "text": "World", "tail": "!"}]
//! }
//! ```
//!
//! `"#comment"` and `"#pi"` select comment and processing-instruction
//! nodes; a null or missing tag is a fragment.

use serde_json::{Map, Value as Json};

use crate::element::{Element, QName, Tag, Value};
use crate::{Error, Result};

pub const COMMENT_TAG: &str = "#comment";
pub const PI_TAG: &str = "#pi";

impl Element {
    /// Decode an element tree from its JSON form
    pub fn from_json(json: &Json) -> Result<Self> {
        let Json::Object(obj) = json else {
            return Err(type_error(json));
        };

        let mut elem = Element::with_tag(decode_tag(obj.get("tag"))?);
        elem.text = optional_string(obj.get("text"))?;
        elem.tail = optional_string(obj.get("tail"))?;

        match obj.get("attributes") {
            None | Some(Json::Null) => {}
            Some(Json::Object(attrs)) => decode_attributes(attrs, &mut elem)?,
            Some(other) => return Err(type_error(other)),
        }

        match obj.get("children") {
            None | Some(Json::Null) => {}
            Some(Json::Array(children)) => {
                for child in children {
                    elem.add_child(Element::from_json(child)?);
                }
            }
            Some(other) => return Err(type_error(other)),
        }

        Ok(elem)
    }

    /// Decode an element tree from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: Json = serde_json::from_str(text)?;
        Self::from_json(&json)
    }
}

fn decode_tag(tag: Option<&Json>) -> Result<Tag> {
    match tag {
        None | Some(Json::Null) => Ok(Tag::Fragment),
        Some(Json::String(s)) => match s.as_str() {
            COMMENT_TAG => Ok(Tag::Comment),
            PI_TAG => Ok(Tag::ProcessingInstruction),
            name if name.starts_with('{') => Ok(Tag::Qualified(QName::parse(name)?)),
            name => Ok(Tag::Name(name.to_string())),
        },
        Some(other) => Err(type_error(other)),
    }
}

fn decode_attributes(attrs: &Map<String, Json>, elem: &mut Element) -> Result<()> {
    for (key, value) in attrs {
        let key = if key.starts_with('{') {
            Value::QName(QName::parse(key)?)
        } else {
            Value::Str(key.clone())
        };
        elem.set_attr(key, decode_value(value)?);
    }
    Ok(())
}

fn decode_value(value: &Json) -> Result<Value> {
    match value {
        Json::String(s) => Ok(Value::Str(s.clone())),
        Json::Object(obj) => match obj.get("qname") {
            Some(Json::String(q)) if obj.len() == 1 => Ok(Value::QName(QName::parse(q)?)),
            _ => Err(type_error(value)),
        },
        other => Err(type_error(other)),
    }
}

fn optional_string(value: Option<&Json>) -> Result<Option<String>> {
    match value {
        None | Some(Json::Null) => Ok(None),
        Some(Json::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(type_error(other)),
    }
}

fn type_error(value: &Json) -> Error {
    let type_name = match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    };
    Error::Serialization {
        value: value.to_string(),
        type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_html_string;
    use serde_json::json;

    #[test]
    fn test_decode_tree() {
        let elem = Element::from_json(&json!({
            "tag": "p",
            "text": "Hello ",
            "attributes": {"class": "lead"},
            "children": [{"tag": "em", "text": "World", "tail": "!"}]
        }))
        .unwrap();

        assert_eq!(elem.tag, Tag::Name("p".to_string()));
        assert_eq!(elem.len(), 1);
        assert_eq!(to_html_string(&elem).unwrap(), "<p class=\"lead\">Hello <em>World</em>!</p>");
    }

    #[test]
    fn test_decode_sentinels() {
        let elem = Element::from_json(&json!({
            "children": [
                {"tag": "#comment", "text": "note"},
                {"tag": "#pi", "text": "xml-stylesheet"}
            ]
        }))
        .unwrap();

        assert_eq!(elem.tag, Tag::Fragment);
        assert_eq!(elem.children[0].tag, Tag::Comment);
        assert_eq!(elem.children[1].tag, Tag::ProcessingInstruction);
        assert_eq!(to_html_string(&elem).unwrap(), "<!--note--><?xml-stylesheet?>");
    }

    #[test]
    fn test_decode_qualified() {
        let elem = Element::from_json(&json!({
            "tag": "{http://www.w3.org/2000/svg}svg",
            "attributes": {"{urn:x}role": {"qname": "img"}}
        }))
        .unwrap();

        assert_eq!(
            to_html_string(&elem).unwrap(),
            "<svg role=\"img\" xmlns=\"http://www.w3.org/2000/svg\"></svg>"
        );
    }

    #[test]
    fn test_non_string_text() {
        let err = Element::from_json(&json!({"tag": "p", "text": 5})).unwrap_err();
        assert!(matches!(err, Error::Serialization { type_name: "number", .. }));
        assert_eq!(err.to_string(), "cannot serialize 5 (type number)");
    }

    #[test]
    fn test_non_string_attribute() {
        let err = Element::from_json(&json!({
            "tag": "input",
            "attributes": {"checked": true}
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "cannot serialize true (type bool)");
    }

    #[test]
    fn test_non_string_tail_in_child() {
        let err = Element::from_json(&json!({
            "tag": "ul",
            "children": [{"tag": "li", "tail": ["x"]}]
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Serialization { type_name: "array", .. }));
    }

    #[test]
    fn test_malformed_qualified_tag() {
        let err = Element::from_json(&json!({"tag": "{urn:x"})).unwrap_err();
        assert!(matches!(err, Error::MalformedQualifiedName(_)));
    }

    #[test]
    fn test_from_json_str() {
        let elem = Element::from_json_str(r#"{"tag": "br", "tail": "x"}"#).unwrap();
        assert_eq!(to_html_string(&elem).unwrap(), "<br>x");
    }
}
