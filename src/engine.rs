//! Batch transcription engine.
//!
//! The engine owns the speech model lifecycle: it ensures the configured
//! Whisper model is on disk (downloading on first run), loads it, and
//! transcribes one audio file at a time for the batch driver.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::audio::{self, TARGET_SAMPLE_RATE};
use crate::config::Config;
use crate::models::ModelManager;
use crate::transcribe::{Transcriber, WhisperTranscriber};

/// Events emitted during engine initialization.
#[derive(Debug, Clone)]
pub enum InitEvent {
    /// Model is being downloaded.
    Downloading { model: String },
    /// Model is being loaded into memory.
    Loading { model: String },
    /// Engine is ready.
    Ready,
}

/// Batch transcription engine.
pub struct Engine {
    config: Config,
    model_manager: ModelManager,
    transcriber: Option<WhisperTranscriber>,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let model_manager = ModelManager::new()?;
        Ok(Self {
            config,
            model_manager,
            transcriber: None,
        })
    }

    /// Create a new engine with a custom model manager.
    pub fn with_model_manager(config: Config, model_manager: ModelManager) -> Self {
        Self {
            config,
            model_manager,
            transcriber: None,
        }
    }

    /// Check if the engine has been initialized (model loaded).
    pub fn is_initialized(&self) -> bool {
        self.transcriber.is_some()
    }

    /// Initialize the engine: download and load the speech model.
    ///
    /// Calls `on_progress` with status updates suitable for display.
    /// After this returns Ok(()), the engine is ready for transcription.
    pub async fn initialize(&mut self, on_progress: impl Fn(InitEvent) + Send) -> Result<()> {
        info!("Initializing engine");

        let model = self.config.model.model;
        if self.model_manager.is_cached(model) {
            on_progress(InitEvent::Loading {
                model: model.to_string(),
            });
        } else {
            on_progress(InitEvent::Downloading {
                model: model.to_string(),
            });
        }

        let model_path = self
            .model_manager
            .ensure_model(model)
            .await
            .context("Failed to ensure Whisper model")?;

        on_progress(InitEvent::Loading {
            model: model.to_string(),
        });

        let transcriber = WhisperTranscriber::new(&model_path, language_hint(&self.config))
            .context("Failed to initialize Whisper")?;
        self.transcriber = Some(transcriber);

        on_progress(InitEvent::Ready);
        info!("Engine initialized");

        Ok(())
    }

    /// Transcribe one audio file to raw text.
    ///
    /// Requires `initialize()` to have been called first.
    pub fn transcribe_file(&mut self, path: &Path) -> Result<String> {
        let transcriber = self
            .transcriber
            .as_mut()
            .context("Engine not initialized — call initialize() first")?;

        let samples = audio::load_for_transcription(path)
            .with_context(|| format!("Failed to load audio: {}", path.display()))?;

        transcriber.transcribe(&samples, TARGET_SAMPLE_RATE)
    }
}

/// Map the configured language to a Whisper hint ("auto" means autodetect).
pub(crate) fn language_hint(config: &Config) -> Option<String> {
    if config.model.language == "auto" {
        None
    } else {
        Some(config.model.language.clone())
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
