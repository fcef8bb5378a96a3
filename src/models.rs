//! Whisper model download and management.
//!
//! Handles automatic downloading of speech models on first run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::config::SpeechModel;

const WHISPER_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Metadata for a downloadable model.
struct ModelInfo {
    /// Filename to save as.
    filename: &'static str,
    /// Download URL.
    url: String,
    /// Expected file size for validation (optional).
    size_bytes: Option<u64>,
}

/// Get download metadata for a speech model.
fn model_info(model: SpeechModel) -> ModelInfo {
    let (filename, size_bytes) = match model {
        SpeechModel::WhisperTiny => ("ggml-tiny.bin", 77_691_713),
        SpeechModel::WhisperTinyEn => ("ggml-tiny.en.bin", 77_704_715),
        SpeechModel::WhisperBase => ("ggml-base.bin", 147_951_465),
        SpeechModel::WhisperBaseEn => ("ggml-base.en.bin", 147_964_211),
        SpeechModel::WhisperSmall => ("ggml-small.bin", 487_601_967),
        SpeechModel::WhisperSmallEn => ("ggml-small.en.bin", 487_614_201),
        SpeechModel::WhisperMedium => ("ggml-medium.bin", 1_533_774_781),
        SpeechModel::WhisperMediumEn => ("ggml-medium.en.bin", 1_533_774_781),
        SpeechModel::WhisperLargeV3 => ("ggml-large-v3.bin", 3_094_623_691),
        SpeechModel::WhisperLargeV3Turbo => ("ggml-large-v3-turbo.bin", 1_624_592_891),
    };
    ModelInfo {
        filename,
        url: format!("{WHISPER_BASE_URL}/{filename}"),
        size_bytes: Some(size_bytes),
    }
}

/// Manages model downloads and storage.
pub struct ModelManager {
    models_dir: PathBuf,
}

impl ModelManager {
    /// Create a new ModelManager using the default models directory.
    ///
    /// Default: `~/.local/share/lexivox/models/`
    pub fn new() -> Result<Self> {
        let models_dir = crate::dirs::models_dir()?;
        Ok(Self { models_dir })
    }

    /// Create a ModelManager with a custom models directory.
    pub fn with_dir(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Get the models directory path.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// True when the model file is already present on disk.
    pub fn is_cached(&self, model: SpeechModel) -> bool {
        self.models_dir.join(model_info(model).filename).exists()
    }

    /// Ensure a model is available, downloading if necessary.
    ///
    /// Returns the path to the model file.
    pub async fn ensure_model(&self, model: SpeechModel) -> Result<PathBuf> {
        let info = model_info(model);
        let model_path = self.models_dir.join(info.filename);

        if model_path.exists() {
            // Validate size if known
            if let Some(expected_size) = info.size_bytes {
                let metadata = fs::metadata(&model_path)
                    .await
                    .context("Failed to read model metadata")?;
                let actual_size = metadata.len();

                if actual_size != expected_size {
                    warn!(
                        model = %model,
                        expected = expected_size,
                        actual = actual_size,
                        "Model size mismatch, re-downloading"
                    );
                    fs::remove_file(&model_path)
                        .await
                        .context("Failed to remove corrupted model")?;
                } else {
                    debug!(path = %model_path.display(), "Model already exists");
                    return Ok(model_path);
                }
            } else {
                debug!(path = %model_path.display(), "Model already exists");
                return Ok(model_path);
            }
        }

        // Download the model
        self.download_model(&info, &model_path).await?;
        Ok(model_path)
    }

    /// Download a model from its URL.
    async fn download_model(&self, info: &ModelInfo, dest: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create models directory")?;
        }

        info!(
            url = %info.url,
            dest = %dest.display(),
            "Downloading model"
        );

        let response = reqwest::get(&info.url)
            .await
            .with_context(|| format!("Failed to download model from {}", info.url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to download model: HTTP {}", response.status());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        if let Some(expected) = info.size_bytes {
            if bytes.len() as u64 != expected {
                anyhow::bail!(
                    "Downloaded model size mismatch: expected {}, got {}",
                    expected,
                    bytes.len()
                );
            }
        }

        // Write to temporary file first, then rename (atomic)
        let temp_path = dest.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)
            .await
            .context("Failed to create temporary model file")?;
        file.write_all(&bytes)
            .await
            .context("Failed to write model file")?;
        file.sync_all().await.context("Failed to sync model file")?;

        fs::rename(&temp_path, dest)
            .await
            .context("Failed to finalize model file")?;

        info!(
            path = %dest.display(),
            size = bytes.len(),
            "Model downloaded successfully"
        );

        Ok(())
    }
}
