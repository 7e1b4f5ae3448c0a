//! Subtitle rendering for subgen
//!
//! SRT serialization and timestamp formatting.

mod srt;
mod timestamp;

pub use srt::{render_srt, write_srt};
pub use timestamp::format_timestamp;
