//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ModelSize;

/// subgen - Generate SRT subtitles and JSON transcripts from media files
#[derive(Parser, Debug)]
#[command(name = "subgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate subtitle and transcript files for a media file
    Generate {
        /// Path to the media file to transcribe
        media: PathBuf,

        /// Whisper model size to use
        #[arg(short, long, value_enum)]
        model: Option<ModelSize>,

        /// Language hint (e.g. "en", "de"); auto-detect when omitted
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
