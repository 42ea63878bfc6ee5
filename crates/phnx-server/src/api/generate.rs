//! Generation endpoint.
//!
//! Accepts a raw spec document or an http(s) URL to fetch one from,
//! runs the generator pipeline, and returns the full file set. A parse
//! or validation failure fails the whole request; there is never a
//! partial file set.

use axum::extract::State;
use axum::Json;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use phnx_codegen::{GenerateError, Generator};

use crate::error::ApiError;

use super::router::AppState;

/// Upper bound on spec text, local or remote.
pub const MAX_SPEC_BYTES: usize = 5_000_000;

/// Specs shorter than this (trimmed) are rejected as empty.
const MIN_SPEC_CHARS: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(tag = "inputMethod", rename_all = "lowercase")]
pub enum GenerateRequest {
    Raw { spec: String },
    Url { url: String },
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(rename = "projectName")]
    pub project_name: String,
    /// File name → content, in emission order.
    pub files: Map<String, Value>,
}

/// POST /api/generate
///
/// The body is decoded by hand so a malformed request still gets the
/// structured `{ error }` shape instead of the framework's default.
pub async fn generate(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let request: GenerateRequest = serde_json::from_str(&body)
        .map_err(|_| ApiError::bad_request("Invalid JSON body."))?;

    let spec_text = match request {
        GenerateRequest::Raw { spec } => {
            // 413 is reserved for oversized remote fetches; an oversized
            // inline spec is plain bad input.
            if spec.len() > MAX_SPEC_BYTES {
                return Err(ApiError::bad_request("Spec too large (max 5MB)."));
            }
            spec
        }
        GenerateRequest::Url { url } => fetch_remote_spec(&state.http, &url).await?,
    };

    if spec_text.trim().len() < MIN_SPEC_CHARS {
        return Err(ApiError::bad_request("Spec is empty."));
    }

    let generation = Generator::new()
        .generate(spec_text)
        .map_err(|e| match e {
            GenerateError::Parse(parse_err) => ApiError::bad_request_with_details(
                "Spec could not be parsed as JSON or YAML.",
                parse_err.to_string(),
            ),
            GenerateError::Validation => {
                ApiError::bad_request("Spec does not look like OpenAPI (missing openapi/paths).")
            }
        })?;

    tracing::info!(
        request_id = %request_id,
        project = %generation.project_name,
        files = generation.files.len(),
        "generation completed"
    );

    let mut files = Map::new();
    for file in generation.files {
        files.insert(file.file_name, Value::String(file.content));
    }

    Ok(Json(GenerateResponse {
        project_name: generation.project_name,
        files,
    }))
}

/// Reject anything that is not an absolute http(s) URL. Runs before any
/// network call.
pub fn check_url_scheme(url: &str) -> Result<reqwest::Url, ApiError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|_| ApiError::bad_request("URL must be http(s)."))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ApiError::bad_request("URL must be http(s).")),
    }
}

/// Fetch spec text from a remote URL, enforcing the size cap while the
/// body streams in rather than after buffering it whole.
async fn fetch_remote_spec(http: &reqwest::Client, url: &str) -> Result<String, ApiError> {
    let parsed = check_url_scheme(url)?;

    let response = http
        .get(parsed)
        .header(
            "accept",
            "application/json, application/yaml, text/yaml, text/plain;q=0.9, */*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(url, error = %e, "remote spec fetch failed");
            ApiError::bad_request("Failed to fetch URL.")
        })?;

    if !response.status().is_success() {
        return Err(ApiError::bad_request("Failed to fetch URL."));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_SPEC_BYTES {
            return Err(ApiError::payload_too_large("Spec too large (max 5MB)."));
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|_| ApiError::bad_request("Failed to fetch URL."))?;
        if buf.len() + chunk.len() > MAX_SPEC_BYTES {
            return Err(ApiError::payload_too_large("Spec too large (max 5MB)."));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
