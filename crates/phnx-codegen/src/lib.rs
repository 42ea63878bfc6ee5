//! OpenAPI → TypeScript client generation.
//!
//! Normalizes a decoded spec into a [`document::Document`], then runs a set
//! of independent emitters over it: interfaces (`types.ts`), Zod schemas
//! (`schemas.ts`), a fetch client (`client.ts`), GET-only React hooks
//! (`hooks.ts`), and an adapter stub (`adapters.ts`). The [`Generator`]
//! facade composes parse → validate → emit into one whole-or-nothing call.

pub mod adapters;
pub mod client;
pub mod document;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod interfaces;
pub mod names;
pub mod zod;

pub use document::{Document, Operation, Parameter, SchemaNode};
pub use error::GenerateError;
pub use generator::{GeneratedFile, Generation, Generator};

use names::{operation_base_name, pascal_case};

/// Inline request/response bodies in operation order, paired with their
/// derived declaration names (`<PascalOp>Request`, `<PascalOp>Response<status>`).
///
/// Bare references are excluded: those are used by name, not redeclared.
/// Both the interface and the Zod emitter walk this list, which is what
/// keeps `types.ts` and `schemas.ts` positionally consistent.
pub fn inline_bodies(doc: &Document) -> Vec<(String, SchemaNode)> {
    let mut bodies = Vec::new();

    for op in &doc.operations {
        let base = pascal_case(&operation_base_name(op));

        if let Some(body) = &op.request_body {
            if !body.is_ref() {
                bodies.push((format!("{base}Request"), body.clone()));
            }
        }

        for (status, schema) in &op.responses {
            if !schema.is_ref() {
                bodies.push((format!("{base}Response{}", pascal_case(status)), schema.clone()));
            }
        }
    }

    bodies
}
