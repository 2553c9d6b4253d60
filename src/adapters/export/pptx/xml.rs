//! XML text helpers shared by the part writers.

use std::borrow::Cow;

/// Escapes text for use in element content or attribute values.
///
/// Characters that XML 1.0 cannot represent at all (most C0 controls) are
/// dropped.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    let needs_work = text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || !is_xml_char(c));
    if !needs_work {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    Cow::Owned(out)
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Converts points to the hundredths-of-a-point used by `a:rPr/@sz` and
/// `a:spcPts/@val`.
pub const fn pt100(points: u32) -> u32 {
    points * 100
}

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

pub const fn inches(value: i64) -> i64 {
    value * EMU_PER_INCH
}
