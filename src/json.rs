//! JSON reading and writing of element sequences.
//!
//! The format is the extractor's element list: a JSON array of
//! `{"type", "element_id", "text", "metadata": {"page_number", ...}}`
//! objects. Unknown metadata keys survive a read/write cycle.

use crate::error::{Error, Result};
use crate::model::Element;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Parse an element list from a JSON string.
pub fn from_str(json: &str) -> Result<Vec<Element>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse an element list from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Element>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse an element list from a JSON file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    from_reader(BufReader::new(file)).map_err(|e| match e {
        Error::Json(err) => Error::InvalidInput(format!("{}: {}", path.display(), err)),
        other => other,
    })
}

/// Serialize an element list to a JSON string.
pub fn to_string(elements: &[Element], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(elements)?,
        JsonFormat::Compact => serde_json::to_string(elements)?,
    };
    Ok(json)
}

/// Write an element list to a JSON file.
pub fn to_file<P: AsRef<Path>>(path: P, elements: &[Element], format: JsonFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(&mut writer, elements)?,
        JsonFormat::Compact => serde_json::to_writer(&mut writer, elements)?,
    }
    writer.flush()?;
    Ok(())
}
