//! Identifier derivation.
//!
//! Pure string transforms shared by every emitter, so the four generated
//! files agree on one name per operation and per schema.

use crate::document::Operation;

/// Fallback project name when the spec has no usable title.
pub const DEFAULT_PROJECT_NAME: &str = "phnxbyte-client";

/// Split on non-alphanumeric runs, capitalize each token, concatenate.
pub fn pascal_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// [`pascal_case`] with the first character lower-cased.
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Turn a path template into words: `{param}` becomes `by param`, slashes
/// become spaces, and an empty result becomes `root`.
pub fn path_to_words(path: &str) -> String {
    let substituted = replace_path_params(path, |name| format!("by {name}"));
    let cleaned = substituted
        .trim_matches('/')
        .split('/')
        .filter(|seg| !seg.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        "root".to_string()
    } else {
        cleaned
    }
}

/// Map an HTTP method to a verb word for derived names.
pub fn verb_word(method: &str) -> String {
    match method.to_ascii_lowercase().as_str() {
        "get" => "get".to_string(),
        "post" => "create".to_string(),
        "put" => "update".to_string(),
        "patch" => "patch".to_string(),
        "delete" => "delete".to_string(),
        other => other.to_string(),
    }
}

/// Base (space-separated) name for an operation: its operationId when
/// present, else `<verb-word> <path words>`.
pub fn operation_base_name(op: &Operation) -> String {
    match &op.operation_id {
        Some(id) => id.clone(),
        None => format!("{} {}", verb_word(&op.method), path_to_words(&op.path)),
    }
}

/// Client method name, e.g. `getUsersById`.
pub fn method_name(op: &Operation) -> String {
    camel_case(&operation_base_name(op))
}

/// Hook name, e.g. `UseListPets`.
pub fn hook_name(op: &Operation) -> String {
    pascal_case(&format!("use {}", operation_base_name(op)))
}

/// Derive the output project name from the spec title: lower-cased, any run
/// outside `[a-z0-9-_]` collapsed to a single hyphen, edge hyphens trimmed.
pub fn project_name(title: Option<&str>) -> String {
    let base = title.unwrap_or(DEFAULT_PROJECT_NAME).to_ascii_lowercase();

    let mut slug = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        slug
    }
}

/// Replace every `{param}` placeholder in a path template.
///
/// Text outside placeholders passes through untouched; an unterminated
/// `{` is kept literally rather than dropped.
pub fn replace_path_params(path: &str, mut substitute: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        match rest[open..].find('}') {
            Some(close) => {
                let name = &rest[open + 1..open + close];
                out.push_str(&substitute(name));
                rest = &rest[open + close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
