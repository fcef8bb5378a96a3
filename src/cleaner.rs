//! Transcript cleaning.
//!
//! Removes generic filler language from recognized speech, sentence by
//! sentence, while protecting spans that match the learned vocabulary. The
//! scan tries the longest match first — trigram, then bigram, then single
//! word — so a known domain phrase is never fragmented by the single-word
//! filler filter.

use crate::vocabulary::Vocabulary;

/// Fillers dropped by the single-word pass. Distinct from the training
/// stoplist. Entries containing a space are kept for compatibility with the
/// historical list but cannot match a single token.
const CLEANING_STOPLIST: &[&str] = &[
    "um", "uh", "like", "you know", "i mean", "sort of", "kind of", "basically", "actually",
    "literally", "right", "okay", "well", "just",
];

/// Punctuation stripped from word edges before vocabulary comparison.
const EDGE_PUNCTUATION: &[char] = &['.', ',', ';', '!', '?'];

/// Clean a raw transcript with the given vocabulary.
///
/// With an empty (untrained) vocabulary the text is returned unchanged:
/// filler removal alone is too aggressive without a reference corpus. The
/// result is never empty for non-empty input — when every sentence filters
/// to nothing, the original text is returned instead.
pub fn clean(text: &str, vocabulary: &Vocabulary) -> String {
    if vocabulary.is_empty() {
        return text.to_string();
    }

    let cleaned: Vec<String> = text
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter_map(|sentence| clean_sentence(sentence, vocabulary))
        .collect();

    if cleaned.is_empty() {
        text.to_string()
    } else {
        format!("{}.", cleaned.join(". "))
    }
}

/// Clean one sentence; `None` when no word survives.
fn clean_sentence(sentence: &str, vocabulary: &Vocabulary) -> Option<String> {
    let words: Vec<String> = sentence
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(EDGE_PUNCTUATION).to_string())
        .collect();

    let mut kept: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let word = words[i].as_str();
        if word.is_empty() {
            i += 1;
            continue;
        }

        if i + 2 < words.len() {
            let trigram = format!("{} {} {}", word, words[i + 1], words[i + 2]);
            if vocabulary.phrases.contains(&trigram) {
                kept.extend([word, words[i + 1].as_str(), words[i + 2].as_str()]);
                i += 3;
                continue;
            }
        }

        if i + 1 < words.len() {
            let bigram = format!("{} {}", word, words[i + 1]);
            if vocabulary.terms.contains(&bigram) || vocabulary.phrases.contains(&bigram) {
                kept.extend([word, words[i + 1].as_str()]);
                i += 2;
                continue;
            }
        }

        if vocabulary.terms.contains(word) || !CLEANING_STOPLIST.contains(&word) {
            kept.push(word);
        }
        i += 1;
    }

    if kept.is_empty() {
        return None;
    }
    Some(capitalize(&kept.join(" ")))
}

/// Uppercase the first character.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "cleaner_test.rs"]
mod tests;
