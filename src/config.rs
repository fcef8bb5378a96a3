//! Configuration management for lexivox.
//!
//! Handles loading, saving, and providing defaults for the tool
//! configuration. Vocabulary training thresholds are deliberately NOT
//! configurable — they are fixed design constants in the trainer.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub batch: BatchConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

/// Configuration for the speech recognition model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Speech recognition model to use.
    pub model: SpeechModel,
    /// Language hint for recognition. Use "auto" for automatic detection.
    pub language: String,
}

/// Configuration for batch processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Audio file extensions enumerated when a folder is queued.
    pub audio_extensions: Vec<String>,
    /// Files larger than this are skipped.
    pub max_file_size_mb: u64,
    /// Prefix for generated output directories.
    pub output_prefix: String,
}

/// Configuration for vocabulary training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Reference document extensions enumerated during training.
    pub document_extensions: Vec<String>,
}

/// Supported speech recognition models (whisper.cpp GGML builds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechModel {
    WhisperTiny,
    WhisperTinyEn,
    #[default]
    WhisperBase,
    WhisperBaseEn,
    WhisperSmall,
    WhisperSmallEn,
    WhisperMedium,
    WhisperMediumEn,
    WhisperLargeV3,
    WhisperLargeV3Turbo,
}

impl fmt::Display for SpeechModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeechModel::WhisperTiny => "whisper-tiny",
            SpeechModel::WhisperTinyEn => "whisper-tiny-en",
            SpeechModel::WhisperBase => "whisper-base",
            SpeechModel::WhisperBaseEn => "whisper-base-en",
            SpeechModel::WhisperSmall => "whisper-small",
            SpeechModel::WhisperSmallEn => "whisper-small-en",
            SpeechModel::WhisperMedium => "whisper-medium",
            SpeechModel::WhisperMediumEn => "whisper-medium-en",
            SpeechModel::WhisperLargeV3 => "whisper-large-v3",
            SpeechModel::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
        };
        f.write_str(name)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: LogLevel,
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to a tracing filter directive string for this crate.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "lexivox=error",
            LogLevel::Warn => "lexivox=warn",
            LogLevel::Info => "lexivox=info",
            LogLevel::Debug => "lexivox=debug",
            LogLevel::Trace => "lexivox=trace",
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: SpeechModel::default(),
            language: "auto".to_string(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            audio_extensions: vec!["wav".to_string()],
            max_file_size_mb: 100,
            output_prefix: "lexivox_output".to_string(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            document_extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

impl Config {
    /// Returns the default config file path.
    /// `~/.config/lexivox/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        crate::dirs::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file as TOML")
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
