//! Paragraph-level text frame writer.
//!
//! A text body always holds at least one paragraph. The frame starts with a
//! single empty paragraph that the first written item takes over; every
//! later item appends a new paragraph.

use std::fmt::Write;

use super::xml::{escape_xml, pt100};

/// Paragraph formatting for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// Plain paragraph, no bullet.
    Text { size_pt: u32, space_after_pt: u32 },
    /// First-level bullet.
    Bullet { size_pt: u32, space_after_pt: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Paragraph {
    kind: ParagraphKind,
    text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    first_slot_used: bool,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one item, reusing the initial empty paragraph for the first.
    pub fn push(&mut self, kind: ParagraphKind, text: impl Into<String>) {
        let paragraph = Paragraph {
            kind,
            text: text.into(),
        };
        if !self.first_slot_used {
            self.first_slot_used = true;
            self.paragraphs.clear();
        }
        self.paragraphs.push(paragraph);
    }

    /// Writes `<a:p>` elements for the frame into `xml`.
    pub fn write_paragraphs(&self, xml: &mut String) -> std::fmt::Result {
        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
            return Ok(());
        }

        for paragraph in &self.paragraphs {
            xml.push_str("<a:p>");
            match paragraph.kind {
                ParagraphKind::Text { size_pt, space_after_pt } => {
                    write!(
                        xml,
                        r#"<a:pPr marL="0" indent="0"><a:spcAft><a:spcPts val="{}"/></a:spcAft><a:buNone/></a:pPr>"#,
                        pt100(space_after_pt)
                    )?;
                    write_runs(xml, &paragraph.text, size_pt)?;
                }
                ParagraphKind::Bullet { size_pt, space_after_pt } => {
                    write!(
                        xml,
                        r#"<a:pPr marL="342900" lvl="0" indent="-342900"><a:spcAft><a:spcPts val="{}"/></a:spcAft><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#,
                        pt100(space_after_pt)
                    )?;
                    write_runs(xml, &paragraph.text, size_pt)?;
                }
            }
            xml.push_str("</a:p>");
        }
        Ok(())
    }
}

/// Writes runs for `text`, turning embedded newlines into `<a:br/>`.
pub fn write_runs(xml: &mut String, text: &str, size_pt: u32) -> std::fmt::Result {
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            write!(xml, r#"<a:br><a:rPr lang="en-US" sz="{}" dirty="0"/></a:br>"#, pt100(size_pt))?;
        }
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        write!(
            xml,
            r#"<a:r><a:rPr lang="en-US" sz="{}" dirty="0"/><a:t>{}</a:t></a:r>"#,
            pt100(size_pt),
            escape_xml(line)
        )?;
    }
    Ok(())
}
