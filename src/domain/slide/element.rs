//! Positioned visual elements on the 800x450 slide canvas.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Visual element kinds.
///
/// `Image` and `Shape` come from the editor and are carried through storage,
/// but they have no counterpart in exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    BulletList,
    Table,
    Image,
    Shape,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::BulletList => "bulletList",
            ElementKind::Table => "table",
            ElementKind::Image => "image",
            ElementKind::Shape => "shape",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "text" => Ok(ElementKind::Text),
            "bulletList" => Ok(ElementKind::BulletList),
            "table" => Ok(ElementKind::Table),
            "image" => Ok(ElementKind::Image),
            "shape" => Ok(ElementKind::Shape),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown element type '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the content of a text element is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextRole {
    #[default]
    Paragraph,
    /// Newline-separated items, each usually prefixed with `•`.
    Bullets,
}

impl TextRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextRole::Paragraph => "paragraph",
            TextRole::Bullets => "bullets",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "paragraph" => Some(TextRole::Paragraph),
            "bullets" => Some(TextRole::Bullets),
            _ => None,
        }
    }

    /// Role for text that arrives without one: anything containing a `•`
    /// marker is treated as a bullet block.
    pub fn classify(content: &str) -> Self {
        if content.contains('•') {
            TextRole::Bullets
        } else {
            TextRole::Paragraph
        }
    }
}

/// Free-form CSS-like style properties (`fontSize`, `color`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementStyle(BTreeMap<String, String>);

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ElementStyle {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub const DEFAULT_TABLE_ROWS: usize = 2;
pub const DEFAULT_TABLE_COLS: usize = 2;

/// Grid content of a table element.
///
/// Only cells inside both the declared bounds and the grid are meaningful;
/// extra grid data is ignored and missing cells read as blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(rows: usize, cols: usize, cells: Vec<Vec<String>>) -> Self {
        Self { rows, cols, cells }
    }

    /// Cell text at `(row, col)`, or `None` outside the declared bounds or
    /// past the end of the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }
}

impl Default for TableData {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_ROWS, DEFAULT_TABLE_COLS, Vec::new())
    }
}

/// One positioned visual unit on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideElement {
    pub id: String,
    pub kind: ElementKind,
    pub role: TextRole,
    pub content: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub style: ElementStyle,
    pub table_data: Option<TableData>,
}

impl SlideElement {
    /// A text element with the given role.
    pub fn text(id: impl Into<String>, role: TextRole, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Text,
            role,
            content: content.into(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            style: ElementStyle::new(),
            table_data: None,
        }
    }

    /// A table element.
    pub fn table(id: impl Into<String>, data: TableData) -> Self {
        Self {
            kind: ElementKind::Table,
            table_data: Some(data),
            ..Self::text(id, TextRole::Paragraph, "")
        }
    }

    pub fn at(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_bullet_block(&self) -> bool {
        self.kind == ElementKind::BulletList
            || (self.kind == ElementKind::Text && self.role == TextRole::Bullets)
    }
}
