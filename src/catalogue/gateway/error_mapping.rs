//! Error mapping helpers for the HTTP catalogue gateway.

use http::StatusCode;
use serde::Deserialize;

use crate::catalogue::error::CatalogueError;

const MAX_ERROR_BODY_CHARS: usize = 160;

/// FastAPI-style error body (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> CatalogueError {
    if error.is_decode() {
        return CatalogueError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    CatalogueError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_status_error(
    operation: &str,
    status: StatusCode,
    maybe_body: Option<&str>,
) -> CatalogueError {
    let detail = maybe_body
        .and_then(extract_detail)
        .or_else(|| {
            maybe_body
                .map(str::trim)
                .filter(|body| !body.is_empty())
                .map(|body| truncate_for_message(body, MAX_ERROR_BODY_CHARS))
        })
        .or_else(|| status.canonical_reason().map(ToOwned::to_owned))
        .unwrap_or_else(|| "unknown error".to_owned());

    CatalogueError::Api {
        status: status.as_u16(),
        message: format!("{operation} failed: {detail}"),
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorDetail = serde_json::from_str(body).ok()?;
    let text = match parsed.detail {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    };
    Some(truncate_for_message(text.trim(), MAX_ERROR_BODY_CHARS))
}

pub(super) fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}
