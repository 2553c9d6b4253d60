//! OPC package assembly.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A named part with its serialized content.
#[derive(Debug, Clone)]
pub struct Part {
    pub path: String,
    pub content: String,
}

impl Part {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Zips `parts` in order. `[Content_Types].xml` must be the first part.
pub fn write_package(parts: &[Part]) -> Result<Vec<u8>, PackageError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for part in parts {
        writer.start_file(part.path.as_str(), options)?;
        writer.write_all(part.content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn parts_round_trip_through_archive() {
        let parts = vec![
            Part::new("[Content_Types].xml", "<Types/>"),
            Part::new("ppt/slides/slide1.xml", "<p:sld/>"),
        ];
        let bytes = write_package(&parts).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert_eq!(slide, "<p:sld/>");
    }
}
