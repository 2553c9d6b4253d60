//! Recovery of slide content from prose model output.

use super::fallback::{templated_bullets, templated_summary, templated_title};
use super::record::{
    ContentRecord, DEFAULT_DESIGN_THEME, DEFAULT_LAYOUT_TYPE, MAX_BULLET_POINTS,
};

/// Result of [`parse_text`], with a flag telling whether anything at all was
/// recovered from the text (as opposed to templated from the prompt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTextParse {
    pub record: ContentRecord,
    pub recovered_anything: bool,
}

fn is_bullet(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('•')
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '•']).trim()
}

/// Parses free-form text into a content record.
///
/// * title: first non-empty, non-bullet line among the first three lines
/// * bullets: every `-`/`•` line anywhere, markers stripped, at most five
/// * content: first non-empty, non-bullet line that differs from the title
///
/// Missing pieces are filled from the prompt templates.
pub fn parse_text(text: &str, prompt: &str) -> FreeTextParse {
    let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();

    let title = lines
        .iter()
        .take(3)
        .find(|line| !line.is_empty() && !is_bullet(line))
        .map(|line| line.to_string());

    let bullets: Vec<String> = lines
        .iter()
        .filter(|line| is_bullet(line))
        .map(|line| strip_bullet(line))
        .filter(|item| !item.is_empty())
        .take(MAX_BULLET_POINTS)
        .map(str::to_string)
        .collect();

    let recovered_anything = title.is_some() || !bullets.is_empty();
    let title = title.unwrap_or_else(|| templated_title(prompt));

    let content = lines
        .iter()
        .find(|line| !line.is_empty() && !is_bullet(line) && **line != title)
        .map(|line| line.to_string())
        .unwrap_or_else(|| templated_summary(prompt));

    let bullet_points = if bullets.is_empty() {
        templated_bullets(prompt)
    } else {
        bullets
    };

    FreeTextParse {
        record: ContentRecord {
            title,
            content,
            bullet_points,
            design_theme: DEFAULT_DESIGN_THEME.to_string(),
            layout_type: DEFAULT_LAYOUT_TYPE.to_string(),
        },
        recovered_anything,
    }
}
