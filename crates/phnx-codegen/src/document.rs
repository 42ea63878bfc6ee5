//! Normalized document model.
//!
//! Built once from the raw decoded value, read-only afterwards. Named
//! schemas keep document-declaration order (`serde_json` is compiled with
//! `preserve_order`); operations are ordered by path in document order,
//! then by method in a fixed verb order, so inline-body names come out
//! deterministic across runs on the same input.

use serde::Serialize;
use serde_json::Value;

/// HTTP methods the emitters generate code for, in emission order.
pub const HTTP_METHODS: &[&str] = &["get", "post", "put", "patch", "delete"];

/// A normalized spec document.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// The `openapi` version marker.
    pub version: String,
    /// The `info.title` field, if present.
    pub title: Option<String>,
    /// Named schemas from `components/schemas`, in declaration order.
    pub schemas: Vec<(String, SchemaNode)>,
    /// Operations in path-then-method order.
    pub operations: Vec<Operation>,
}

/// One HTTP method on one path template.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// The path template (e.g. "/users/{id}").
    pub path: String,
    /// The HTTP method (uppercase).
    pub method: String,
    /// The OpenAPI operationId, if present.
    pub operation_id: Option<String>,
    /// Path and query parameters (path-level merged with operation-level).
    pub parameters: Vec<Parameter>,
    /// Request body schema, if the operation declares one.
    pub request_body: Option<SchemaNode>,
    /// Response schemas keyed by status, in declaration order.
    pub responses: Vec<(String, SchemaNode)>,
}

/// A path or query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    /// "path" or "query".
    pub location: String,
    pub required: bool,
}

/// A recursive type description.
///
/// References are kept by name and never inlined, which is what makes
/// emission terminate on cyclic specs.
#[derive(Debug, Clone, Serialize)]
pub enum SchemaNode {
    String { format: Option<String> },
    Number,
    Integer,
    Boolean,
    Array(Box<SchemaNode>),
    Object {
        properties: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    Ref(String),
    /// Fallback for unions, nullables, and untyped schemas.
    Any,
}

impl Document {
    /// Normalize a raw decoded spec.
    ///
    /// Tolerant by design: unknown or malformed sub-objects degrade to
    /// [`SchemaNode::Any`] or get skipped rather than failing the whole
    /// document. The shallow shape check happens before this in
    /// `phnx_spec_parser::validate`.
    pub fn from_value(raw: &Value) -> Self {
        let version = raw
            .get("openapi")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let title = raw
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let schemas = raw
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(|s| s.as_object())
            .map(|map| {
                map.iter()
                    .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                    .collect()
            })
            .unwrap_or_default();

        let operations = parse_operations(raw);

        Document {
            version,
            title,
            schemas,
            operations,
        }
    }
}

/// Walk `paths` in document order, methods in fixed verb order.
fn parse_operations(raw: &Value) -> Vec<Operation> {
    let mut operations = Vec::new();

    let paths = match raw.get("paths").and_then(|v| v.as_object()) {
        Some(p) => p,
        None => return operations,
    };

    for (path, path_item) in paths {
        let path_obj = match path_item.as_object() {
            Some(o) => o,
            None => continue,
        };

        // Path-level parameters (inherited by all operations)
        let path_params = parse_parameters(path_obj);

        for method in HTTP_METHODS {
            let op_obj = match path_obj.get(*method).and_then(|v| v.as_object()) {
                Some(o) => o,
                None => continue,
            };

            let mut parameters = path_params.clone();
            parameters.extend(parse_parameters(op_obj));

            let operation_id = op_obj
                .get("operationId")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            operations.push(Operation {
                path: path.clone(),
                method: method.to_uppercase(),
                operation_id,
                parameters,
                request_body: parse_request_body(op_obj),
                responses: parse_responses(op_obj),
            });
        }
    }

    operations
}

/// Parse parameters from a path item or operation object.
fn parse_parameters(obj: &serde_json::Map<String, Value>) -> Vec<Parameter> {
    obj.get("parameters")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|item| {
                    let param = item.as_object()?;
                    Some(Parameter {
                        name: param.get("name")?.as_str()?.to_string(),
                        location: param.get("in")?.as_str()?.to_string(),
                        required: param
                            .get("required")
                            .and_then(|v| v.as_bool())
                            .unwrap_or(false),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Pull the request body schema: `application/json` first, else the first
/// declared media type.
fn parse_request_body(obj: &serde_json::Map<String, Value>) -> Option<SchemaNode> {
    let content = obj.get("requestBody")?.get("content")?.as_object()?;
    media_schema(content).map(SchemaNode::from_value)
}

/// Pull per-status response schemas, skipping bodyless responses.
fn parse_responses(obj: &serde_json::Map<String, Value>) -> Vec<(String, SchemaNode)> {
    let responses = match obj.get("responses").and_then(|v| v.as_object()) {
        Some(r) => r,
        None => return Vec::new(),
    };

    responses
        .iter()
        .filter_map(|(status, resp)| {
            let content = resp.get("content")?.as_object()?;
            let schema = media_schema(content)?;
            Some((status.clone(), SchemaNode::from_value(schema)))
        })
        .collect()
}

/// Pick a schema out of a content map, preferring `application/json`.
fn media_schema(content: &serde_json::Map<String, Value>) -> Option<&Value> {
    content
        .get("application/json")
        .or_else(|| content.values().next())
        .and_then(|media| media.get("schema"))
}

impl SchemaNode {
    /// Build a schema node from a raw schema object.
    pub fn from_value(raw: &Value) -> Self {
        let obj = match raw.as_object() {
            Some(o) => o,
            None => return SchemaNode::Any,
        };

        if let Some(reference) = obj.get("$ref").and_then(|v| v.as_str()) {
            // "#/components/schemas/Pet" -> "Pet"; keep the last segment for
            // any other ref shape rather than failing.
            let name = reference.rsplit('/').next().unwrap_or(reference);
            return SchemaNode::Ref(name.to_string());
        }

        match obj.get("type").and_then(|v| v.as_str()) {
            Some("string") => SchemaNode::String {
                format: obj
                    .get("format")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string()),
            },
            Some("number") => SchemaNode::Number,
            Some("integer") => SchemaNode::Integer,
            Some("boolean") => SchemaNode::Boolean,
            Some("array") => {
                let element = obj
                    .get("items")
                    .map(SchemaNode::from_value)
                    .unwrap_or(SchemaNode::Any);
                SchemaNode::Array(Box::new(element))
            }
            Some("object") => parse_object(obj),
            // No explicit type but properties present: treat as object.
            None if obj.contains_key("properties") => parse_object(obj),
            // Unions (oneOf/anyOf/allOf), nullables, and anything else
            // ambiguous fall back to Any.
            _ => SchemaNode::Any,
        }
    }

    /// True when this node is a bare reference to a named schema.
    pub fn is_ref(&self) -> bool {
        matches!(self, SchemaNode::Ref(_))
    }
}

fn parse_object(obj: &serde_json::Map<String, Value>) -> SchemaNode {
    let properties = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .map(|props| {
            props
                .iter()
                .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                .collect()
        })
        .unwrap_or_default();

    let required = obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default();

    SchemaNode::Object {
        properties,
        required,
    }
}
