//! # lexivox
//!
//! Vocabulary-aware batch speech transcription: learns domain terms and
//! phrases from reference documents, transcribes audio recordings with
//! Whisper, and cleans filler language out of the transcripts while
//! protecting known domain phrases.

pub mod audio;
pub mod batch;
pub mod cleaner;
pub mod config;
pub mod corpus;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod models;
pub mod trainer;
pub mod transcribe;
pub mod vocabulary;

pub use cleaner::clean;
pub use config::Config;
pub use engine::Engine;
pub use error::LexivoxError;
pub use trainer::train;
pub use vocabulary::Vocabulary;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Application-specific environment variable for log filtering (overrides config).
const LOG_ENV_VAR: &str = "LEXIVOX_LOG";

/// Configure logging: a non-blocking file appender in the XDG state
/// directory, so progress output owns the terminal.
///
/// The returned guard must stay alive for the process lifetime or buffered
/// log lines are lost.
pub fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let log_path = dirs::log_path().context("Failed to determine log path")?;
    let log_dir = log_path.parent().expect("log path has parent");
    let log_filename = log_path.file_name().expect("log path has filename");

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // LEXIVOX_LOG env var overrides config file level
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(config.logging.level.as_directive().parse()?)
        .from_env()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    // Route whisper.cpp and GGML logs through tracing
    whisper_rs::install_logging_hooks();

    Ok(guard)
}
