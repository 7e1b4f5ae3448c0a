//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::ConfigCommand;
use crate::config::{ModelSize, Settings};
use crate::generate::{GenerationResult, Generator};
use crate::transcription::WhisperTranscriber;

/// Run subtitle generation for a media file and print the structured
/// result to stdout.
pub fn generate(
    settings: &Settings,
    media: &Path,
    model: Option<ModelSize>,
    language: Option<String>,
) -> Result<GenerationResult> {
    let mut settings = settings.clone();
    if let Some(model) = model {
        settings.whisper.model = model;
    }
    if let Some(language) = language {
        settings.whisper.language = language;
    }

    // Check the input before loading model weights; a missing file should
    // not cost a multi-second model load.
    let result = if !media.is_file() {
        tracing::error!("Media file not found: {}", media.display());
        GenerationResult::Error {
            message: format!("Media file not found: {}", media.display()),
        }
    } else {
        match WhisperTranscriber::new(&settings) {
            Ok(transcriber) => {
                Generator::new(transcriber, settings.language_hint()).generate(media)
            }
            Err(e) => {
                tracing::error!("Provider initialization failed: {}", e);
                GenerationResult::Error {
                    message: e.to_string(),
                }
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result)
}

/// Handle `config` subcommands
pub fn config_command(settings: &Settings, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(settings)?;
            print!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", Settings::config_path()?.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Config written to: {}", path.display());
        }
    }

    Ok(())
}
