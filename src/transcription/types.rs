//! Data types shared by transcription providers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::Result;

/// A segment of transcribed text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds from the beginning of the media
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Transcribed text
    pub text: String,

    /// Confidence score (0.0 - 1.0), when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            confidence: None,
        }
    }
}

/// The full result of one transcription run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcription {
    /// Segments in the order the provider delivered them
    pub segments: Vec<Segment>,

    /// Provider metadata (language, model, duration, ...)
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// Speech-to-text provider contract.
///
/// One call transcribes one media file to completion; implementations are
/// expected to be reentrant-safe for sequential use from a single thread.
pub trait Transcriber {
    fn transcribe(&self, media: &Path, language: Option<&str>) -> Result<Transcription>;
}
