//! Cursor-based layout of a content record onto the slide canvas.

use crate::domain::content::ContentRecord;
use crate::domain::foundation::element_id;
use crate::domain::theme::{palette, ThemeName};

use super::element::{ElementStyle, SlideElement, TextRole};

pub const UNTITLED_SLIDE: &str = "Untitled Slide";

pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 450;

const LEFT: i32 = 50;
const TOP: i32 = 80;
const BLOCK_WIDTH: i32 = 700;
const TITLE_HEIGHT: i32 = 60;
const CONTENT_HEIGHT: i32 = 80;
const CURSOR_STEP: i32 = 100;
const BULLET_LINE_HEIGHT: i32 = 30;
const BULLET_PADDING: i32 = 20;

/// Maps a record to positioned elements: title, then content, then bullets.
///
/// The title is always emitted; content and bullets only when present.
/// Output is deterministic apart from element ids.
pub fn map_to_elements(record: &ContentRecord, theme: ThemeName) -> Vec<SlideElement> {
    let colors = palette(theme);
    let mut elements = Vec::with_capacity(3);
    let mut cursor = TOP;

    let title = if record.title.trim().is_empty() {
        UNTITLED_SLIDE
    } else {
        record.title.as_str()
    };
    elements.push(
        SlideElement::text(element_id("title"), TextRole::Paragraph, title)
            .at(LEFT, cursor, BLOCK_WIDTH, TITLE_HEIGHT)
            .with_style(
                ElementStyle::new()
                    .with("fontSize", "24px")
                    .with("fontWeight", "bold")
                    .with("color", colors.primary.to_hex()),
            ),
    );
    cursor += CURSOR_STEP;

    if !record.content.is_empty() {
        elements.push(
            SlideElement::text(element_id("content"), TextRole::Paragraph, record.content.as_str())
                .at(LEFT, cursor, BLOCK_WIDTH, CONTENT_HEIGHT)
                .with_style(
                    ElementStyle::new()
                        .with("fontSize", "16px")
                        .with("color", colors.text.to_hex())
                        .with("lineHeight", "1.5"),
                ),
        );
        cursor += CURSOR_STEP;
    }

    if !record.bullet_points.is_empty() {
        let block = record
            .bullet_points
            .iter()
            .map(|point| format!("• {}", point))
            .collect::<Vec<_>>()
            .join("\n");
        let height = BULLET_LINE_HEIGHT * record.bullet_points.len() as i32 + BULLET_PADDING;

        elements.push(
            SlideElement::text(element_id("bullets"), TextRole::Bullets, block)
                .at(LEFT, cursor, BLOCK_WIDTH, height)
                .with_style(
                    ElementStyle::new()
                        .with("fontSize", "14px")
                        .with("color", colors.text.to_hex())
                        .with("lineHeight", "1.8"),
                ),
        );
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fallback_content;
    use proptest::prelude::*;

    fn record(title: &str, content: &str, bullets: &[&str]) -> ContentRecord {
        ContentRecord {
            title: title.to_string(),
            content: content.to_string(),
            bullet_points: bullets.iter().map(|b| b.to_string()).collect(),
            design_theme: "professional".to_string(),
            layout_type: "bullet-list".to_string(),
        }
    }

    #[test]
    fn full_record_produces_three_stacked_elements() {
        let elements = map_to_elements(&record("T", "C", &["a", "b"]), ThemeName::Blue);

        assert_eq!(elements.len(), 3);
        assert_eq!((elements[0].x, elements[0].y, elements[0].width, elements[0].height), (50, 80, 700, 60));
        assert_eq!((elements[1].y, elements[1].height), (180, 80));
        assert_eq!((elements[2].y, elements[2].height), (280, 80));
        assert_eq!(elements[2].content, "• a\n• b");
        assert_eq!(elements[2].role, TextRole::Bullets);
    }

    #[test]
    fn title_uses_primary_color_and_bold() {
        let elements = map_to_elements(&record("T", "", &[]), ThemeName::Red);
        let style = &elements[0].style;
        assert_eq!(style.get("color"), Some("#dc2626"));
        assert_eq!(style.get("fontWeight"), Some("bold"));
        assert_eq!(style.get("fontSize"), Some("24px"));
    }

    #[test]
    fn body_uses_text_color() {
        let elements = map_to_elements(&record("T", "C", &["a"]), ThemeName::Red);
        assert_eq!(elements[1].style.get("color"), Some("#7f1d1d"));
        assert_eq!(elements[1].style.get("lineHeight"), Some("1.5"));
        assert_eq!(elements[2].style.get("lineHeight"), Some("1.8"));
    }

    #[test]
    fn empty_content_and_bullets_yield_only_title() {
        let elements = map_to_elements(&record("Only", "", &[]), ThemeName::Blue);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].content, "Only");
    }

    #[test]
    fn missing_content_moves_bullets_up() {
        let elements = map_to_elements(&record("T", "", &["a"]), ThemeName::Blue);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].y, 180);
        assert_eq!(elements[1].height, 50);
    }

    #[test]
    fn empty_title_becomes_untitled() {
        let elements = map_to_elements(&record("  ", "", &[]), ThemeName::Blue);
        assert_eq!(elements[0].content, UNTITLED_SLIDE);
    }

    #[test]
    fn unknown_theme_lays_out_like_blue() {
        let theme = ThemeName::resolve(Some("nonexistent"));
        let elements = map_to_elements(&fallback_content("x"), theme);
        assert_eq!(elements[0].style.get("color"), Some("#2563eb"));
    }

    #[test]
    fn element_ids_are_unique() {
        let elements = map_to_elements(&fallback_content("x"), ThemeName::Blue);
        assert!(elements[0].id.starts_with("title_"));
        assert!(elements[1].id.starts_with("content_"));
        assert!(elements[2].id.starts_with("bullets_"));
        assert_ne!(elements[0].id, elements[1].id);
    }

    proptest! {
        #[test]
        fn title_first_and_y_non_decreasing(
            title in ".{0,30}",
            content in ".{0,60}",
            bullets in proptest::collection::vec("[a-z ]{1,20}", 0..6),
        ) {
            let rec = ContentRecord {
                title,
                content,
                bullet_points: bullets,
                design_theme: "professional".to_string(),
                layout_type: "bullet-list".to_string(),
            };
            let elements = map_to_elements(&rec, ThemeName::Blue);

            prop_assert!(!elements.is_empty());
            prop_assert!(elements[0].id.starts_with("title_"));
            prop_assert!(!elements[0].content.trim().is_empty() || elements[0].content == UNTITLED_SLIDE);
            for pair in elements.windows(2) {
                prop_assert!(pair[0].y <= pair[1].y);
            }
        }
    }
}
