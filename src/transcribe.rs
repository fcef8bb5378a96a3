//! Speech-to-text transcription.
//!
//! The [`Transcriber`] trait abstracts the recognition backend; the rest of
//! the pipeline treats it as a black box that turns audio samples into text.
//! The implementation is whisper.cpp via whisper-rs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

/// Speech-to-text transcriber.
///
/// Implementations convert audio samples to text.
pub trait Transcriber: Send {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `audio` - Audio samples as f32, expected to be 16kHz mono
    /// * `sample_rate` - Sample rate of the audio in Hz (must be 16000)
    ///
    /// # Returns
    /// The transcribed text, or an error if transcription failed.
    fn transcribe(&mut self, audio: &[f32], sample_rate: u32) -> Result<String>;
}

/// Whisper speech-to-text transcriber.
///
/// The underlying WhisperContext is leaked intentionally - the model stays
/// loaded for the whole batch run, and the state is reused across files.
pub struct WhisperTranscriber {
    state: WhisperState,
    language: Option<String>,
}

impl WhisperTranscriber {
    /// Create a new Whisper transcriber.
    ///
    /// # Arguments
    /// * `model_path` - Path to the Whisper GGML model file
    /// * `language` - Language code (e.g., "en", "de") or None for auto-detect
    pub fn new(model_path: impl AsRef<Path>, language: Option<String>) -> Result<Self> {
        info!(
            path = %model_path.as_ref().display(),
            language = ?language,
            "Loading Whisper model"
        );

        let ctx = WhisperContext::new_with_params(
            model_path.as_ref().to_str().context("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .context("Failed to load Whisper model")?;

        // Box and leak the context to get a 'static reference. The model is
        // used for every file in the queue, so it lives as long as the run.
        let ctx_box = Box::new(ctx);
        let ctx_ref: &'static WhisperContext = Box::leak(ctx_box);

        let state = ctx_ref
            .create_state()
            .context("Failed to create Whisper state")?;

        info!("Whisper model and state loaded successfully");

        Ok(Self { state, language })
    }

    /// Get the configured language hint.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&mut self, audio: &[f32], sample_rate: u32) -> Result<String> {
        debug!(
            samples = audio.len(),
            sample_rate = sample_rate,
            duration_secs = audio.len() as f32 / sample_rate as f32,
            "Transcribing audio with Whisper"
        );

        // Whisper expects 16kHz audio
        if sample_rate != 16000 {
            anyhow::bail!(
                "Whisper expects 16kHz audio, got {}Hz. Resample before calling transcribe.",
                sample_rate
            );
        }

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // Configure language
        if let Some(ref lang) = self.language {
            params.set_language(Some(lang));
        } else {
            params.set_language(None); // Auto-detect
        }

        // Disable printing to stdout
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        // Run inference using the pre-created state
        self.state
            .full(params, audio)
            .context("Whisper inference failed")?;

        // Collect all segments; recordings span many of them
        let num_segments = self.state.full_n_segments();
        let mut result = String::new();

        for i in 0..num_segments {
            if let Some(segment) = self.state.get_segment(i) {
                if let Ok(text) = segment.to_str_lossy() {
                    result.push_str(&text);
                }
            }
        }

        debug!(text_len = result.len(), "Transcription complete");

        Ok(result.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_language_hint_normalization() {
        // Loading a model requires the model file; the language plumbing is
        // exercised via the option directly.
        let lang = Some("en".to_string());
        assert_eq!(lang.as_deref(), Some("en"));
    }
}
