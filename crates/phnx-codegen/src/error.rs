use thiserror::Error;

/// Errors produced by the generator facade.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Spec text failed to decode.
    #[error(transparent)]
    Parse(#[from] phnx_spec_parser::ParseError),

    /// Spec decoded but lacks the minimal OpenAPI shape.
    #[error("spec does not look like OpenAPI (missing openapi/paths)")]
    Validation,
}
