//! Generator facade: parse → validate → normalize → emit.
//!
//! Whole-or-nothing: a parse or validation failure returns an error and no
//! files. There is no caching; generation is a cold, user-triggered path
//! and each call owns its document.

use phnx_spec_parser::SpecInput;

use crate::document::Document;
use crate::error::GenerateError;
use crate::names::project_name;
use crate::{adapters, client, hooks, interfaces, zod};

/// One output artifact. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
}

/// The full result of one generation request.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Slug derived from the spec title (e.g. "pet-store").
    pub project_name: String,
    pub files: Vec<GeneratedFile>,
}

impl Generation {
    /// Look up one file by name.
    pub fn file(&self, name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.file_name == name)
    }
}

/// Composes the parser and all emitters.
#[derive(Debug, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Generator
    }

    /// Run the full pipeline over one spec input.
    pub fn generate(&self, input: impl Into<SpecInput>) -> Result<Generation, GenerateError> {
        let raw = input.into().into_document()?;

        if !phnx_spec_parser::validate(&raw) {
            return Err(GenerateError::Validation);
        }

        let doc = Document::from_value(&raw);
        tracing::debug!(
            operations = doc.operations.len(),
            schemas = doc.schemas.len(),
            "generating client package"
        );

        let files = vec![
            file("types.ts", interfaces::emit(&doc)),
            file("client.ts", client::emit(&doc)),
            file("hooks.ts", hooks::emit(&doc)),
            file("schemas.ts", zod::emit(&doc)),
            file("adapters.ts", adapters::emit()),
        ];

        Ok(Generation {
            project_name: project_name(doc.title.as_deref()),
            files,
        })
    }
}

fn file(name: &str, content: String) -> GeneratedFile {
    GeneratedFile {
        file_name: name.to_string(),
        content,
    }
}
