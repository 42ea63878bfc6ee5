//! `types.ts` emitter.
//!
//! One declaration per named schema in declaration order, then one per
//! inline request/response body in operation order. References are always
//! used by name, never inlined, so recursive schemas terminate.

use crate::document::{Document, SchemaNode};
use crate::names::pascal_case;

/// Emit the TypeScript type declarations file.
pub fn emit(doc: &Document) -> String {
    let mut out = String::from("// Generated TypeScript interfaces.\n\n");

    for (name, schema) in &doc.schemas {
        push_declaration(&mut out, &pascal_case(name), schema);
    }

    for (decl_name, schema) in super::inline_bodies(doc) {
        push_declaration(&mut out, &decl_name, &schema);
    }

    out
}

/// Push one top-level declaration: object schemas become interfaces,
/// everything else a type alias. An empty object still emits.
fn push_declaration(out: &mut String, name: &str, schema: &SchemaNode) {
    match schema {
        SchemaNode::Object {
            properties,
            required,
        } => {
            out.push_str(&format!("export interface {name} {{\n"));
            for (prop, prop_schema) in properties {
                let marker = if required.contains(prop) { "" } else { "?" };
                out.push_str(&format!(
                    "  {prop}{marker}: {};\n",
                    ts_type(prop_schema)
                ));
            }
            out.push_str("}\n\n");
        }
        other => {
            out.push_str(&format!("export type {name} = {};\n\n", ts_type(other)));
        }
    }
}

/// Render a schema node as a TypeScript type expression.
pub fn ts_type(schema: &SchemaNode) -> String {
    match schema {
        SchemaNode::String { .. } => "string".to_string(),
        SchemaNode::Number | SchemaNode::Integer => "number".to_string(),
        SchemaNode::Boolean => "boolean".to_string(),
        SchemaNode::Array(element) => format!("{}[]", ts_type(element)),
        SchemaNode::Object {
            properties,
            required,
        } => {
            if properties.is_empty() {
                return "Record<string, never>".to_string();
            }
            let fields: Vec<String> = properties
                .iter()
                .map(|(prop, prop_schema)| {
                    let marker = if required.contains(prop) { "" } else { "?" };
                    format!("{prop}{marker}: {}", ts_type(prop_schema))
                })
                .collect();
            format!("{{ {} }}", fields.join("; "))
        }
        SchemaNode::Ref(name) => pascal_case(name),
        SchemaNode::Any => "unknown".to_string(),
    }
}
