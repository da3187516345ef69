//! Test utilities for the Gemini generator.
//!
//! Builders for the response bodies the `generateContent` endpoint returns,
//! so tests can serve canned replies without contacting the real service.

use serde_json::{Value, json};

/// Successful reply whose first candidate carries `text` in a single part.
///
/// # Example
///
/// ```
/// use restwalk_data::generation::test_support::candidate_reply;
///
/// let body = candidate_reply("[]");
/// assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "[]");
/// ```
#[must_use]
pub fn candidate_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// Successful reply with no candidates, as when output is blocked.
#[must_use]
pub fn empty_reply() -> Value {
    json!({ "candidates": [] })
}

/// Error envelope as returned with non-success statuses.
#[must_use]
pub fn error_reply(code: u16, status: &str, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}
