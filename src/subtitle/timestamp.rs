//! SRT timestamp formatting

use crate::{Result, SubgenError};

/// Format a second offset as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Milliseconds are truncated rather than rounded up, so the rendered time
/// never exceeds the input. Hours grow past two digits instead of wrapping
/// for inputs beyond 24 hours. Negative or non-finite input is rejected.
pub fn format_timestamp(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(SubgenError::ValueRange(format!(
            "timestamp must be a non-negative number of seconds, got {}",
            seconds
        )));
    }

    // Quantize to microseconds first so values like 3661.001, which have no
    // exact f64 representation, keep their intended millisecond digit.
    let micros = (seconds * 1_000_000.0).round() as u64;
    let total_ms = micros / 1_000;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;

    Ok(format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms))
}
