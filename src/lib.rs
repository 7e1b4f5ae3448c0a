//! subgen - Generate SRT subtitles and JSON transcripts from media files
//!
//! The core pipeline takes a media path, runs it through a speech-to-text
//! provider, and writes a subtitle file plus a transcript archive beside
//! the input.

pub mod cli;
pub mod config;
pub mod generate;
pub mod subtitle;
pub mod transcript;
pub mod transcription;

use thiserror::Error;

/// Main error type for subgen
#[derive(Error, Debug)]
pub enum SubgenError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transcription error: {0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("Value out of range: {0}")]
    ValueRange(String),
}

pub type Result<T> = std::result::Result<T, SubgenError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "subgen";
