//! `schemas.ts` emitter.
//!
//! Mirrors the interface emitter one-for-one: same traversal order, and
//! every declared type `X` gets a matching `XSchema` validator. References
//! go through `z.lazy` so cyclic schema graphs still parse.

use crate::document::{Document, SchemaNode};
use crate::names::pascal_case;

/// Emit the Zod validator declarations file.
pub fn emit(doc: &Document) -> String {
    let mut out = String::from("// Generated Zod validators, mirroring types.ts.\n\n");
    out.push_str("import { z } from 'zod';\n\n");

    for (name, schema) in &doc.schemas {
        push_declaration(&mut out, &pascal_case(name), schema);
    }

    for (decl_name, schema) in super::inline_bodies(doc) {
        push_declaration(&mut out, &decl_name, &schema);
    }

    out
}

fn push_declaration(out: &mut String, name: &str, schema: &SchemaNode) {
    out.push_str(&format!(
        "export const {name}Schema = {};\n\n",
        zod_expr(schema, 0)
    ));
}

/// Render a schema node as a Zod expression.
///
/// `depth` drives indentation for nested object literals.
fn zod_expr(schema: &SchemaNode, depth: usize) -> String {
    match schema {
        SchemaNode::String { .. } => "z.string()".to_string(),
        SchemaNode::Number | SchemaNode::Integer => "z.number()".to_string(),
        SchemaNode::Boolean => "z.boolean()".to_string(),
        SchemaNode::Array(element) => format!("z.array({})", zod_expr(element, depth)),
        SchemaNode::Object {
            properties,
            required,
        } => {
            if properties.is_empty() {
                return "z.object({})".to_string();
            }
            let pad = "  ".repeat(depth + 1);
            let fields: Vec<String> = properties
                .iter()
                .map(|(prop, prop_schema)| {
                    let expr = zod_expr(prop_schema, depth + 1);
                    if required.contains(prop) {
                        format!("{pad}{prop}: {expr}")
                    } else {
                        format!("{pad}{prop}: {expr}.optional()")
                    }
                })
                .collect();
            format!(
                "z.object({{\n{},\n{}}})",
                fields.join(",\n"),
                "  ".repeat(depth)
            )
        }
        SchemaNode::Ref(name) => format!("z.lazy(() => {}Schema)", pascal_case(name)),
        SchemaNode::Any => "z.unknown()".to_string(),
    }
}
