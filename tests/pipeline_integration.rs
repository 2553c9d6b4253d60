//! Prompt-to-PPTX pipeline: generated slides are exported and the archive
//! is read back the way an office suite would.

#![cfg(feature = "pptx")]

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use slideflow::adapters::content::LlmContentGenerator;
use slideflow::adapters::export::PptxDeckExporter;
use slideflow::domain::slide::{Slide, SlideElement, TableData};
use slideflow::domain::theme::ThemeName;
use slideflow::ports::{ContentGenerator, DeckExporter, ExportError};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

/// Text runs inside `a:tbl`, in document order.
fn table_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth_in_table = 0usize;
    let mut in_text = false;
    let mut texts = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"a:tbl" => depth_in_table += 1,
            Event::End(e) if e.name().as_ref() == b"a:tbl" => depth_in_table -= 1,
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"a:t" => in_text = false,
            Event::Text(t) if in_text && depth_in_table > 0 => {
                texts.push(String::from_utf8(t.to_vec()).unwrap());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    texts
}

async fn generated_slide(id: u64, prompt: &str, theme: ThemeName) -> Slide {
    let generation = LlmContentGenerator::fallback_only().generate(prompt).await;
    Slide::from_content(id, &generation.record, theme, prompt)
}

#[tokio::test]
async fn two_slide_deck_with_table_round_trips() {
    let first = generated_slide(1, "ocean facts", ThemeName::Blue).await;
    let mut second = generated_slide(2, "quarterly budget", ThemeName::Purple).await;
    second.elements.push(SlideElement::table(
        "budget",
        TableData::new(
            2,
            2,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string(), "D".to_string()],
            ],
        ),
    ));
    let first_title = first.title.clone();

    let bytes = PptxDeckExporter::new().export(&[first, second]).unwrap();

    let content_types = read_part(&bytes, "[Content_Types].xml");
    assert!(content_types.contains("/ppt/slides/slide1.xml"));
    assert!(content_types.contains("/ppt/slides/slide2.xml"));
    assert!(!content_types.contains("/ppt/slides/slide3.xml"));

    let slide1 = read_part(&bytes, "ppt/slides/slide1.xml");
    assert!(slide1.contains(&first_title));
    assert!(table_texts(&slide1).is_empty());

    let slide2 = read_part(&bytes, "ppt/slides/slide2.xml");
    let cells = table_texts(&slide2);
    assert_eq!(cells.first().map(String::as_str), Some("A"));
    assert_eq!(cells, vec!["A", "B", "C", "D"]);
}

#[test]
fn oversized_table_fails_without_output() {
    let slide = Slide::new(1, "Wide", ThemeName::Blue).with_elements(vec![SlideElement::table(
        "wide",
        TableData::new(1, 51, vec![]),
    )]);

    let err = PptxDeckExporter::new().export(&[slide]).unwrap_err();
    assert!(matches!(err, ExportError::Slide { index: 0, .. }));
}
