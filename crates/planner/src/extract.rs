//! Locating a JSON object inside noisy model output.
//!
//! Models wrap answers in prose or code fences despite instructions. The
//! scanner below walks top-level `{...}` spans and returns the first one that
//! parses. Braces inside JSON strings (including escaped quotes) do not count
//! towards depth.

use serde_json::{Map, Value};

use crate::error::{PlanError, Result};

/// The first balanced `{...}` substring starting at byte offset `start`.
///
/// Returns `None` if `start` is not at a `{` or the object never closes.
pub fn balanced_object_at(text: &str, start: usize) -> Option<&str> {
    if !text.get(start..)?.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Extracts and parses the first top-level JSON object embedded in `text`.
///
/// A balanced span that does not parse is skipped as a whole; scanning resumes
/// after its closing brace, never inside it. Each byte is visited once.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>> {
    let mut last_error: Option<String> = None;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        let Some(candidate) = balanced_object_at(text, start) else {
            last_error.get_or_insert_with(|| "JSON object is never closed".to_string());
            break;
        };

        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => return Ok(map),
            Ok(_) => {}
            Err(e) => {
                last_error.get_or_insert_with(|| format!("invalid JSON object: {e}"));
            }
        }

        pos = start + candidate.len();
    }

    Err(PlanError::malformed(
        last_error.unwrap_or_else(|| "no JSON object found in response".to_string()),
    ))
}
