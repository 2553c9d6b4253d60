//! Recovery of slide content from JSON model output.

use serde_json::Value;

use super::fallback::templated_title;
use super::record::{
    ContentRecord, DEFAULT_DESIGN_THEME, DEFAULT_LAYOUT_TYPE, MAX_BULLET_POINTS,
};

/// Removes a surrounding Markdown code fence (```` ```json ```` or
/// ```` ``` ````), if any, and trims the result.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (`json`, `JSON`, ...) on the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    body.trim_end().trim_end_matches("```").trim()
}

/// Parses model output as a JSON object and normalizes it.
///
/// Returns `None` when the text is not a JSON object; the caller then tries
/// the free-text parser.
pub fn parse_json_record(text: &str, prompt: &str) -> Option<ContentRecord> {
    let candidate = strip_code_fence(text);
    if !candidate.starts_with('{') {
        return None;
    }

    let value: Value = serde_json::from_str(candidate).ok()?;
    let object = value.as_object()?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| templated_title(prompt));

    let content = object
        .get("content")
        .and_then(Value::as_str)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    Some(ContentRecord {
        title,
        content,
        bullet_points: bullet_points(object.get("bullet_points")),
        design_theme: label(object.get("design_theme"), DEFAULT_DESIGN_THEME),
        layout_type: label(object.get("layout_type"), DEFAULT_LAYOUT_TYPE),
    })
}

fn bullet_points(value: Option<&Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .collect(),
        Some(Value::String(block)) => block
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '•']).trim().to_string())
            .collect(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .take(MAX_BULLET_POINTS)
        .collect()
}

fn label(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}
