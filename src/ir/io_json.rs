//! JSON cache for parsed screens.
//!
//! Parsing a canvas is deterministic, so a parsed [`Screen`] can be written
//! out once and handed to emitters (or re-validated) without touching the
//! SVG again. The format is the serde form of the IR, variant tags included.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::model::Screen;
use crate::error::ArtboardError;

/// Reads a screen from an IR JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_ir_json(path: &Path) -> Result<Screen, ArtboardError> {
    let file = File::open(path).map_err(ArtboardError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| ArtboardError::IrJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a screen to an IR JSON file, pretty-printed.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_ir_json(path: &Path, screen: &Screen) -> Result<(), ArtboardError> {
    let file = File::create(path).map_err(ArtboardError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, screen).map_err(|source| ArtboardError::IrJsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a screen from an IR JSON string.
pub fn from_json_str(json: &str) -> Result<Screen, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a screen from IR JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<Screen, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a screen to a pretty-printed IR JSON string.
pub fn to_json_string(screen: &Screen) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(screen)
}
