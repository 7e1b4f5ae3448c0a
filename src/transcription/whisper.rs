//! Whisper transcription using whisper-rs

use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::config::Settings;
use crate::transcription::{Segment, Transcriber, Transcription};
use crate::{Result, SubgenError};

/// Whisper-based transcriber.
///
/// Loading the model is the expensive step; one instance is meant to be
/// constructed once per process and reused for every generation request.
pub struct WhisperTranscriber {
    ctx: WhisperContext,
    model: String,
}

impl WhisperTranscriber {
    /// Create a new transcriber with the model from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let model_path = settings.model_path();

        if !model_path.exists() {
            return Err(SubgenError::Provider(format!(
                "Whisper model not found at {}. Please download the model first.",
                model_path.display()
            )));
        }

        let path = model_path
            .to_str()
            .ok_or_else(|| SubgenError::Provider("Model path is not valid UTF-8".to_string()))?;

        let ctx = WhisperContext::new_with_params(path, WhisperContextParameters::default())
            .map_err(|e| SubgenError::Provider(format!("Failed to load Whisper model: {}", e)))?;

        Ok(Self {
            ctx,
            model: settings.whisper.model.to_string(),
        })
    }

    fn run_inference(&self, samples: &[f32], language: Option<&str>) -> Result<Vec<Segment>> {
        // Greedy single-pass sampling keeps inference predictable across
        // hardware; no beam search, no temperature fallback.
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        if let Some(lang) = language {
            params.set_language(Some(lang));
        }

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| SubgenError::Provider(format!("Failed to create Whisper state: {}", e)))?;

        state
            .full(params, samples)
            .map_err(|e| SubgenError::Provider(format!("Whisper inference failed: {}", e)))?;

        let num_segments = state
            .full_n_segments()
            .map_err(|e| SubgenError::Provider(format!("Failed to get segment count: {}", e)))?;

        let mut segments = Vec::new();

        for i in 0..num_segments {
            let start = state
                .full_get_segment_t0(i)
                .map_err(|e| SubgenError::Provider(format!("Failed to get segment start: {}", e)))?
                as f64
                / 100.0; // Convert from centiseconds

            let end = state
                .full_get_segment_t1(i)
                .map_err(|e| SubgenError::Provider(format!("Failed to get segment end: {}", e)))?
                as f64
                / 100.0;

            let text = state
                .full_get_segment_text(i)
                .map_err(|e| SubgenError::Provider(format!("Failed to get segment text: {}", e)))?;

            // Skip empty or whitespace-only segments
            let text = text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            segments.push(Segment::new(start, end, text));
        }

        Ok(segments)
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&self, media: &Path, language: Option<&str>) -> Result<Transcription> {
        tracing::info!("Loading audio from: {}", media.display());
        let samples = load_audio(media)?;
        let duration_secs = samples.len() as f64 / 16000.0;

        tracing::info!("Running Whisper inference ({:.1}s of audio)", duration_secs);
        let segments = self.run_inference(&samples, language)?;
        tracing::info!("Transcription complete: {} segments", segments.len());

        let mut metadata = std::collections::BTreeMap::new();
        metadata.insert("model".to_string(), serde_json::json!(self.model));
        metadata.insert(
            "language".to_string(),
            serde_json::json!(language.unwrap_or("auto")),
        );
        metadata.insert("duration_secs".to_string(), serde_json::json!(duration_secs));

        Ok(Transcription { segments, metadata })
    }
}

/// Load audio from a WAV file and convert to f32 samples at 16kHz mono
fn load_audio(path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(path).map_err(|e| {
        SubgenError::Provider(format!("Failed to open audio file {}: {}", path.display(), e))
    })?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    tracing::debug!(
        "Loading audio: {} Hz, {} channels, {:?}",
        sample_rate,
        channels,
        spec.sample_format
    );

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 32768.0)
            .collect(),
        (hound::SampleFormat::Int, 32) => reader
            .into_samples::<i32>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 2147483648.0)
            .collect(),
        (hound::SampleFormat::Float, 32) => {
            reader.into_samples::<f32>().filter_map(|s| s.ok()).collect()
        }
        _ => {
            return Err(SubgenError::Provider(format!(
                "Unsupported audio format: {:?} {}bit",
                spec.sample_format, spec.bits_per_sample
            )))
        }
    };

    // Convert to mono if stereo
    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    // Resample to 16kHz if needed
    let samples = if sample_rate != 16000 {
        resample(&samples, sample_rate, 16000)
    } else {
        samples
    };

    Ok(samples)
}

/// Simple linear resampling
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    let ratio = from_rate as f64 / to_rate as f64;
    let new_len = (samples.len() as f64 / ratio) as usize;
    let mut result = Vec::with_capacity(new_len);

    for i in 0..new_len {
        let src_pos = i as f64 * ratio;
        let src_idx = src_pos as usize;
        let frac = src_pos - src_idx as f64;

        let sample = if src_idx + 1 < samples.len() {
            samples[src_idx] * (1.0 - frac as f32) + samples[src_idx + 1] * frac as f32
        } else if src_idx < samples.len() {
            samples[src_idx]
        } else {
            0.0
        };

        result.push(sample);
    }

    result
}
