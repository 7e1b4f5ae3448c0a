//! Generation orchestration
//!
//! Drives one media file through transcription, subtitle serialization,
//! and transcript archiving, converging every failure into a structured
//! result at this boundary.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::transcription::Transcriber;
use crate::{subtitle, transcript, Result, SubgenError};

/// Outcome of one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResult {
    Success {
        subtitle_path: PathBuf,
        transcript_path: PathBuf,
    },
    Error {
        message: String,
    },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Orchestrates subtitle and transcript generation for media files.
///
/// Holds the transcription provider for the life of the process; each
/// `generate` call is otherwise self-contained.
pub struct Generator<T: Transcriber> {
    transcriber: T,
    language: Option<String>,
}

impl<T: Transcriber> Generator<T> {
    pub fn new(transcriber: T, language: Option<String>) -> Self {
        Self {
            transcriber,
            language,
        }
    }

    /// Generate subtitle and transcript files beside `media`.
    ///
    /// Never returns an error: failures are logged and folded into
    /// `GenerationResult::Error` so callers can branch on structured
    /// output.
    pub fn generate(&self, media: &Path) -> GenerationResult {
        match self.run(media) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Generation failed for {}: {}", media.display(), e);
                GenerationResult::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    fn run(&self, media: &Path) -> Result<GenerationResult> {
        // Fail fast before any model work.
        if !media.is_file() {
            return Err(SubgenError::NotFound(format!(
                "Media file not found: {}",
                media.display()
            )));
        }

        let mut transcription = self
            .transcriber
            .transcribe(media, self.language.as_deref())?;

        // Providers are supposed to deliver segments chronologically, but
        // nothing downstream can repair a shuffled subtitle file, so sort
        // defensively here rather than trusting that.
        let ordered = transcription
            .segments
            .windows(2)
            .all(|w| w[0].start <= w[1].start);
        if !ordered {
            tracing::warn!("Provider returned out-of-order segments, sorting by start time");
            transcription.segments.sort_by(|a, b| {
                a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal)
            });
        }

        // Same base name as the input; a repeated run overwrites its own
        // previous output.
        let subtitle_path = media.with_extension("srt");
        let transcript_path = media.with_extension("json");

        subtitle::write_srt(&subtitle_path, &transcription.segments)?;
        tracing::info!("Wrote subtitles to {}", subtitle_path.display());

        transcript::write_archive(&transcript_path, &transcription)?;
        tracing::info!("Wrote transcript to {}", transcript_path.display());

        Ok(GenerationResult::Success {
            subtitle_path,
            transcript_path,
        })
    }
}
