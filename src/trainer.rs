//! Vocabulary training.
//!
//! Tokenizes a corpus of reference documents, counts word, bigram, and
//! trigram frequencies across the whole corpus, and derives a fresh
//! [`Vocabulary`] by thresholding. The frequency tables are transient;
//! nothing here mutates stored state — the caller persists the result.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::corpus::Document;
use crate::error::{LexivoxError, Result};
use crate::vocabulary::Vocabulary;

/// Minimum corpus-wide occurrences for a word to become a term.
const TERM_MIN_COUNT: u32 = 3;
/// Minimum character length for a term.
const TERM_MIN_LEN: usize = 4;
/// Minimum corpus-wide occurrences for a bigram or trigram to become a phrase.
const PHRASE_MIN_COUNT: u32 = 2;

/// Function words and discourse fillers never admitted as terms.
const TRAINING_STOPLIST: &[&str] = &[
    "um", "uh", "like", "you", "know", "mean", "just", "very", "really", "quite", "sort", "kind",
    "basically", "actually", "literally", "right", "okay", "well", "gonna", "the", "and", "for",
    "are", "this", "that", "with", "from", "have", "been",
];

/// Split text into normalized tokens: lowercase, maximal runs of alphabetic
/// characters. Digits and punctuation act as separators and are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derive a vocabulary from a reference corpus.
///
/// Every document is tokenized independently — n-grams never span a document
/// boundary. Fails with [`LexivoxError::NoCorpus`] when no document yields
/// any tokens; in that case no vocabulary is produced and any previously
/// persisted one is left untouched.
pub fn train(documents: &[Document]) -> Result<Vocabulary> {
    let mut word_freq: HashMap<String, u32> = HashMap::new();
    let mut bigram_freq: HashMap<String, u32> = HashMap::new();
    let mut trigram_freq: HashMap<String, u32> = HashMap::new();

    let mut usable_documents = 0usize;
    for document in documents {
        let tokens = tokenize(&document.text);
        if tokens.is_empty() {
            debug!(path = %document.path.display(), "Document yielded no tokens");
            continue;
        }
        usable_documents += 1;

        for token in &tokens {
            *word_freq.entry(token.clone()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *bigram_freq.entry(pair.join(" ")).or_insert(0) += 1;
        }
        for triple in tokens.windows(3) {
            *trigram_freq.entry(triple.join(" ")).or_insert(0) += 1;
        }
    }

    if usable_documents == 0 {
        return Err(LexivoxError::NoCorpus);
    }

    let terms = word_freq
        .into_iter()
        .filter(|(word, count)| {
            *count >= TERM_MIN_COUNT
                && word.len() >= TERM_MIN_LEN
                && !TRAINING_STOPLIST.contains(&word.as_str())
        })
        .map(|(word, _)| word)
        .collect();

    let phrases = bigram_freq
        .into_iter()
        .chain(trigram_freq)
        .filter(|(_, count)| *count >= PHRASE_MIN_COUNT)
        .map(|(phrase, _)| phrase)
        .collect();

    let vocabulary = Vocabulary { terms, phrases };

    info!(
        documents = usable_documents,
        terms = vocabulary.term_count(),
        phrases = vocabulary.phrase_count(),
        "Training complete"
    );

    Ok(vocabulary)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
