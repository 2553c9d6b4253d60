//! DrawingML table (`p:graphicFrame` + `a:tbl`) writer.

use std::fmt::Write;

use crate::domain::slide::TableData;

use super::xml::{escape_xml, inches, pt100};
use super::RenderError;

/// Largest row or column count accepted for a table.
pub const MAX_TABLE_DIMENSION: usize = 50;

const TABLE_LEFT: i64 = inches(1);
const TABLE_TOP: i64 = inches(3);
const TABLE_WIDTH: i64 = inches(8);
const TABLE_HEIGHT: i64 = inches(2);
const CELL_FONT_PT: u32 = 12;

/// Writes a table shape with the given shape id.
///
/// Only cells inside both the declared bounds and the grid are filled; the
/// rest stay blank.
pub fn write_table(
    xml: &mut String,
    shape_id: u32,
    table: &TableData,
) -> Result<(), RenderError> {
    check_dimension("rows", table.rows)?;
    check_dimension("cols", table.cols)?;

    let rows = table.rows as i64;
    let cols = table.cols as i64;
    let col_width = TABLE_WIDTH / cols;
    let row_height = TABLE_HEIGHT / rows;

    write!(
        xml,
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table {name}"/><p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#,
        id = shape_id,
        name = shape_id - 1
    )?;
    write!(
        xml,
        r#"<p:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></p:xfrm>"#,
        TABLE_LEFT, TABLE_TOP, TABLE_WIDTH, TABLE_HEIGHT
    )?;
    xml.push_str(r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>"#);

    for col in 0..cols {
        // Last column absorbs the rounding remainder.
        let width = if col == cols - 1 {
            TABLE_WIDTH - col_width * (cols - 1)
        } else {
            col_width
        };
        write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
    }
    xml.push_str("</a:tblGrid>");

    for row in 0..table.rows {
        write!(xml, r#"<a:tr h="{}">"#, row_height)?;
        for col in 0..table.cols {
            xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/><a:p>");
            match table.cell(row, col).filter(|text| !text.is_empty()) {
                Some(text) => write!(
                    xml,
                    r#"<a:r><a:rPr lang="en-US" sz="{}" dirty="0"/><a:t>{}</a:t></a:r>"#,
                    pt100(CELL_FONT_PT),
                    escape_xml(text)
                )?,
                None => write!(
                    xml,
                    r#"<a:endParaRPr lang="en-US" sz="{}" dirty="0"/>"#,
                    pt100(CELL_FONT_PT)
                )?,
            }
            xml.push_str("</a:p></a:txBody><a:tcPr/></a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}

fn check_dimension(field: &'static str, value: usize) -> Result<(), RenderError> {
    if value == 0 || value > MAX_TABLE_DIMENSION {
        return Err(RenderError::InvalidTable {
            field,
            value,
            max: MAX_TABLE_DIMENSION,
        });
    }
    Ok(())
}
