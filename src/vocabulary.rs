//! The learned domain vocabulary and its persistent store.
//!
//! A [`Vocabulary`] is the output of one training run: the set of single-word
//! domain terms and the set of two- and three-word domain phrases. It is
//! immutable after publication — training builds a fresh value that replaces
//! the previous one wholesale, and cleaning only ever reads it.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LexivoxError, Result};

/// Domain terms and phrases learned from a reference corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Normalized single words (lowercase, alphabetic only).
    pub terms: BTreeSet<String>,
    /// Normalized multi-word strings (two or three words, space-joined).
    pub phrases: BTreeSet<String>,
}

impl Vocabulary {
    /// True when no training has produced any terms or phrases.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }

    /// Number of learned terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of learned phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Load a vocabulary from its JSON store.
    ///
    /// A missing file maps to [`LexivoxError::StoreMissing`] and an
    /// undeserializable one to [`LexivoxError::StoreCorrupt`]; callers treat
    /// both as the untrained state rather than a failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexivoxError::StoreMissing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&content)?;

        debug!(
            path = %path.display(),
            terms = vocabulary.term_count(),
            phrases = vocabulary.phrase_count(),
            "Loaded vocabulary"
        );

        Ok(vocabulary)
    }

    /// Save the vocabulary to its JSON store.
    ///
    /// Writes to a temporary file first, then renames, so a crash mid-write
    /// never leaves a corrupt store behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        info!(
            path = %path.display(),
            terms = self.term_count(),
            phrases = self.phrase_count(),
            "Saved vocabulary"
        );

        Ok(())
    }
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
