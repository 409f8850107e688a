//! JSON export for scene documents.
//!
//! Rendering backends live outside this crate; the JSON document is the
//! hand-off format they consume.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDocument;

/// Errors that can occur during JSON export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for JSON export.
#[derive(Debug, Clone, Default)]
pub struct JsonExportOptions {
    /// Pretty-print with indentation instead of compact output.
    pub pretty: bool,
}

/// Serializes a document to a JSON string.
pub fn document_to_json(document: &SceneDocument, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Writes a document as a JSON file.
///
/// # Arguments
/// * `document` - The scene to export
/// * `path` - Output file path
/// * `options` - Export options
pub fn write_document_json(
    document: &SceneDocument,
    path: &Path,
    options: &JsonExportOptions,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    if options.pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
