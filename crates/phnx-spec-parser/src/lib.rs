//! OpenAPI spec decoding.
//!
//! Accepts JSON or YAML text, decodes it to a raw `serde_json::Value`, and
//! offers a shallow `validate` check (version marker + paths map). Full
//! normalization into the codegen document model lives in `phnx-codegen`.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_spec, parse_spec_file, validate, SpecInput};
