//! Transcript archiving
//!
//! Writes the full transcription result (segments plus provider metadata)
//! as pretty-printed JSON so downstream tooling can reuse it without
//! re-running inference.

use std::io;
use std::path::Path;

use crate::transcription::Transcription;
use crate::Result;

/// Serialize the full transcription to a JSON string.
pub fn render_archive(transcription: &Transcription) -> Result<String> {
    let json = serde_json::to_string_pretty(transcription).map_err(io::Error::from)?;
    Ok(json)
}

/// Write the transcript archive to `path`, replacing any existing file.
pub fn write_archive(path: &Path, transcription: &Transcription) -> Result<()> {
    let content = render_archive(transcription)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a previously written archive.
pub fn read_archive(path: &Path) -> Result<Transcription> {
    let content = std::fs::read_to_string(path)?;
    let transcription = serde_json::from_str(&content).map_err(io::Error::from)?;
    Ok(transcription)
}
