//! subgen - Generate SRT subtitles and JSON transcripts from media files
//!
//! Entry point for the subgen CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use subgen::cli::{Cli, Commands};
use subgen::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            subgen::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            init_logging(cli.verbose, &settings.general.log_level);

            match command {
                Commands::Generate {
                    media,
                    model,
                    language,
                } => {
                    let result =
                        subgen::cli::commands::generate(&settings, &media, model, language)?;
                    if !result.is_success() {
                        std::process::exit(1);
                    }
                }
                Commands::Config(config_cmd) => {
                    subgen::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

/// Initialize tracing to stderr; stdout is reserved for the structured
/// result. Precedence: RUST_LOG, then -v flags, then the config file.
fn init_logging(verbosity: u8, config_level: &str) {
    let level = match verbosity {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
