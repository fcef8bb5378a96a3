//! Error types for the lexivox core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the vocabulary and transcription core.
///
/// Per-document and per-file failures are absorbed by the callers (logged,
/// skipped); only failures that make a whole operation meaningless — an empty
/// corpus, an unreadable store — surface through this type.
#[derive(Debug, Error)]
pub enum LexivoxError {
    /// Training found no usable text in any reference document.
    #[error("no usable text found in any reference document")]
    NoCorpus,

    /// A reference document's format cannot be converted to text.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedDocument(PathBuf),

    /// The vocabulary store does not exist yet.
    #[error("vocabulary store not found at {}", .0.display())]
    StoreMissing(PathBuf),

    /// The vocabulary store exists but cannot be deserialized.
    #[error("vocabulary store is corrupt: {0}")]
    StoreCorrupt(#[from] serde_json::Error),

    /// An audio file's format cannot be decoded.
    #[error("unsupported audio format: {}", .0.display())]
    UnsupportedAudio(PathBuf),

    /// An audio file could not be read or resampled.
    #[error("audio read error: {0}")]
    AudioRead(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, LexivoxError>;
