use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^```(?:json)?|```$").expect("FENCE_RE is a valid regex pattern")
});

static JSON_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON_SPAN_RE is a valid regex pattern"));

/// Cleans raw model output and extracts the embedded JSON object.
///
/// Strips markdown fences and a single wrapping pair of parentheses, then
/// takes the first `{` through the last `}` as the candidate object. Fails
/// with `NoJsonFound` (carrying the raw text) when no such span exists and
/// `MalformedJson` when the span does not parse.
pub fn extract_json(raw: &str) -> AppResult<Value> {
    let mut cleaned = raw.trim().to_string();

    cleaned = FENCE_RE.replace_all(&cleaned, "").trim().to_string();

    if cleaned.starts_with('(') && cleaned.ends_with(')') {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }

    let candidate = JSON_SPAN_RE
        .find(&cleaned)
        .ok_or_else(|| AppError::NoJsonFound(raw.to_string()))?
        .as_str();

    serde_json::from_str(candidate).map_err(|e| {
        AppError::MalformedJson(format!("{}\nCleaned Output:\n{}", e, candidate))
    })
}
