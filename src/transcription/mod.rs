//! Transcription module for subgen
//!
//! Defines the provider contract and the Whisper-backed implementation.

mod types;
mod whisper;

pub use types::{Segment, Transcriber, Transcription};
pub use whisper::WhisperTranscriber;
