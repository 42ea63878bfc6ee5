use thiserror::Error;

/// Errors produced while decoding spec text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Text failed both the JSON and the YAML decode attempts.
    #[error("failed to parse input as JSON or YAML (json: {json}; yaml: {yaml})")]
    Undecodable { json: String, yaml: String },

    /// YAML decoded cleanly but the root is a scalar or a sequence.
    #[error("decoded spec root must be an object")]
    NotAnObject,

    /// I/O error reading the spec file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
