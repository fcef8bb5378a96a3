//! Reference document discovery and text extraction.
//!
//! Documents are transient: they are read into memory for one training run
//! and discarded afterwards. A document that cannot be read or has an
//! unsupported format is skipped with a warning — only a corpus that yields
//! no text at all fails the training run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LexivoxError, Result};

/// One reference document's extracted text.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the text came from.
    pub path: PathBuf,
    /// Raw text content.
    pub text: String,
}

/// Extract plain text from a reference document.
///
/// Only extensions in `extensions` are considered convertible; anything else
/// fails with [`LexivoxError::UnsupportedDocument`]. Invalid UTF-8 bytes are
/// replaced rather than rejected — reference material is often exported from
/// editors with mixed encodings.
pub fn read_document(path: &Path, extensions: &[String]) -> Result<Document> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
    if !supported {
        return Err(LexivoxError::UnsupportedDocument(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    debug!(path = %path.display(), bytes = text.len(), "Read reference document");

    Ok(Document {
        path: path.to_path_buf(),
        text,
    })
}

/// Collect all readable reference documents from a folder.
///
/// Files are visited in sorted order so training is deterministic. Per-file
/// failures are logged and skipped; the caller decides whether an empty
/// result is fatal.
pub fn collect_documents(folder: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        match read_document(&path, extensions) {
            Ok(document) => documents.push(document),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping reference document");
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;
