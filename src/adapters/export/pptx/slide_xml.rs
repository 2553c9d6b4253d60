//! Renders one domain slide to a `ppt/slides/slideN.xml` part.

use std::fmt::Write;

use crate::domain::slide::{ElementKind, Slide, TableData};
use crate::domain::theme::palette;

use super::table::write_table;
use super::templates::{NS_A, NS_P, NS_R};
use super::text_frame::{ParagraphKind, TextFrame};
use super::xml::{escape_xml, pt100};
use super::RenderError;

const TITLE_FONT_PT: u32 = 32;

const BODY_TEXT: ParagraphKind = ParagraphKind::Text {
    size_pt: 16,
    space_after_pt: 12,
};
const BODY_BULLET: ParagraphKind = ParagraphKind::Bullet {
    size_pt: 14,
    space_after_pt: 6,
};

/// Elements of a slide grouped by where they land in the document.
#[derive(Debug, Default)]
struct Buckets<'a> {
    text: Vec<&'a str>,
    bullets: Vec<String>,
    tables: Vec<&'a TableData>,
}

fn partition<'a>(slide: &'a Slide, default_table: &'a TableData) -> Buckets<'a> {
    let mut buckets = Buckets::default();

    for element in &slide.elements {
        match element.kind {
            ElementKind::Table => {
                buckets
                    .tables
                    .push(element.table_data.as_ref().unwrap_or(default_table));
            }
            _ if element.is_bullet_block() => {
                buckets.bullets.extend(bullet_items(&element.content));
            }
            // Every marker-less text element becomes a paragraph, title
            // echoes and blank content included.
            ElementKind::Text => buckets.text.push(&element.content),
            ElementKind::BulletList | ElementKind::Image | ElementKind::Shape => {}
        }
    }
    buckets
}

/// One item per non-empty line, with the leading marker removed.
fn bullet_items(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches('•')
                .trim_start()
                .to_string()
        })
        .filter(|item| !item.is_empty())
}

/// Renders the slide part.
pub fn render_slide(slide: &Slide) -> Result<String, RenderError> {
    let default_table = TableData::default();
    let buckets = partition(slide, &default_table);

    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:cSld>"#,
        NS_A, NS_R, NS_P
    )?;
    write!(
        xml,
        r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
        slide.background_color.srgb()
    )?;
    xml.push_str(r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    write_title(&mut xml, slide)?;
    write_body(&mut xml, &buckets)?;

    for (index, table) in buckets.tables.iter().enumerate() {
        write_table(&mut xml, 4 + index as u32, table)?;
    }

    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    Ok(xml)
}

fn write_title(xml: &mut String, slide: &Slide) -> Result<(), RenderError> {
    let color = palette(slide.color_theme).primary;
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p>"#);
    write!(
        xml,
        r#"<a:r><a:rPr lang="en-US" sz="{}" b="1" dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r>"#,
        pt100(TITLE_FONT_PT),
        color.srgb(),
        escape_xml(&slide.title)
    )?;
    xml.push_str("</a:p></p:txBody></p:sp>");
    Ok(())
}

fn write_body(xml: &mut String, buckets: &Buckets<'_>) -> Result<(), RenderError> {
    let mut frame = TextFrame::new();
    for text in &buckets.text {
        frame.push(BODY_TEXT, *text);
    }
    for item in &buckets.bullets {
        frame.push(BODY_BULLET, item.as_str());
    }

    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>"#);
    frame.write_paragraphs(xml)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}
