use std::path::Path;

use serde_json::Value;

use crate::error::ParseError;

/// Spec input: raw text awaiting a decode, or an already-decoded document.
///
/// A `Document` passes through [`SpecInput::into_document`] unchanged; no
/// deep copy, no re-validation of its shape.
#[derive(Debug, Clone)]
pub enum SpecInput {
    Text(String),
    Document(Value),
}

impl SpecInput {
    /// Decode the input into a raw document value.
    pub fn into_document(self) -> Result<Value, ParseError> {
        match self {
            SpecInput::Text(text) => parse_spec(&text),
            SpecInput::Document(doc) => Ok(doc),
        }
    }
}

impl From<&str> for SpecInput {
    fn from(text: &str) -> Self {
        SpecInput::Text(text.to_string())
    }
}

impl From<String> for SpecInput {
    fn from(text: String) -> Self {
        SpecInput::Text(text)
    }
}

impl From<Value> for SpecInput {
    fn from(doc: Value) -> Self {
        SpecInput::Document(doc)
    }
}

/// Parse spec text into a raw document value.
///
/// JSON is attempted first, then YAML. A YAML decode that yields a scalar
/// or sequence root is a parse failure, not a silently accepted document.
pub fn parse_spec(input: &str) -> Result<Value, ParseError> {
    match serde_json::from_str::<Value>(input) {
        Ok(doc) => Ok(doc),
        Err(json_err) => match serde_yaml::from_str::<Value>(input) {
            Ok(doc) if doc.is_object() => Ok(doc),
            Ok(_) => Err(ParseError::NotAnObject),
            Err(yaml_err) => Err(ParseError::Undecodable {
                json: json_err.to_string(),
                yaml: yaml_err.to_string(),
            }),
        },
    }
}

/// Parse a spec from a file path.
pub fn parse_spec_file(path: &Path) -> Result<Value, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_spec(&content)
}

/// Shallow structural check: a truthy version marker and a present `paths`
/// map. Deliberately does not inspect individual operations.
pub fn validate(doc: &Value) -> bool {
    let version_ok = doc.get("openapi").is_some_and(is_truthy);
    version_ok && doc.get("paths").is_some()
}

/// JS-style truthiness for the version marker.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
