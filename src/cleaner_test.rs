use super::*;

fn vocab(terms: &[&str], phrases: &[&str]) -> Vocabulary {
    Vocabulary {
        terms: terms.iter().map(|s| s.to_string()).collect(),
        phrases: phrases.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_empty_vocabulary_is_passthrough() {
    let vocabulary = Vocabulary::default();
    let text = "Um, you know, this is basically unchanged.";

    assert_eq!(clean(text, &vocabulary), text);
}

#[test]
fn test_empty_text_with_trained_vocabulary() {
    let vocabulary = vocab(&["diagnosis"], &[]);
    assert_eq!(clean("", &vocabulary), "");
}

#[test]
fn test_filler_words_are_dropped() {
    let vocabulary = vocab(&["patient"], &[]);
    let cleaned = clean("Um, the patient is okay, basically stable.", &vocabulary);

    assert_eq!(cleaned, "The patient is stable.");
}

#[test]
fn test_trigram_phrase_survives_intact() {
    let vocabulary = vocab(&[], &["acute myocardial infarction"]);
    let cleaned = clean(
        "Um, the patient has acute myocardial infarction.",
        &vocabulary,
    );

    assert_eq!(cleaned, "The patient has acute myocardial infarction.");
}

#[test]
fn test_trigram_of_filler_words_is_protected() {
    // Each component word would be dropped by the single-word pass.
    let vocabulary = vocab(&[], &["well um right"]);
    let cleaned = clean("He said well um right away.", &vocabulary);

    assert_eq!(cleaned, "He said well um right away.");
}

#[test]
fn test_bigram_phrase_survives() {
    let vocabulary = vocab(&[], &["mitral valve"]);
    let cleaned = clean("Okay, mitral valve looks fine.", &vocabulary);

    assert_eq!(cleaned, "Mitral valve looks fine.");
}

#[test]
fn test_term_is_never_dropped() {
    // "right" is in the cleaning stoplist; as a learned term it must survive.
    let vocabulary = vocab(&["right"], &[]);
    let cleaned = clean("The right atrium.", &vocabulary);

    assert_eq!(cleaned, "The right atrium.");
}

#[test]
fn test_edge_punctuation_is_stripped() {
    let vocabulary = vocab(&["stenosis"], &[]);
    let cleaned = clean("Severe stenosis, noted; here!", &vocabulary);

    assert_eq!(cleaned, "Severe stenosis noted here.");
}

#[test]
fn test_sentences_are_rejoined_with_periods() {
    let vocabulary = vocab(&["stable"], &[]);
    let cleaned = clean("Patient is stable. Um, discharge tomorrow.", &vocabulary);

    assert_eq!(cleaned, "Patient is stable. Discharge tomorrow.");
}

#[test]
fn test_first_word_is_capitalized() {
    let vocabulary = vocab(&["discharge"], &[]);
    let cleaned = clean("um, discharge planned.", &vocabulary);

    assert_eq!(cleaned, "Discharge planned.");
}

#[test]
fn test_fully_filtered_text_falls_back_to_original() {
    let vocabulary = vocab(&["unrelated"], &[]);
    let text = "Um. Uh. Okay.";

    assert_eq!(clean(text, &vocabulary), text);
}

#[test]
fn test_sentence_with_no_survivors_is_dropped() {
    let vocabulary = vocab(&["stable"], &[]);
    let cleaned = clean("Patient is stable. Um, uh, okay.", &vocabulary);

    assert_eq!(cleaned, "Patient is stable.");
}

#[test]
fn test_multi_word_stoplist_entries_never_match_single_tokens() {
    // "you know" is listed as a unit; the single-word pass compares one
    // token at a time, so "you" and "know" each pass through.
    let vocabulary = vocab(&["lesion"], &[]);
    let cleaned = clean("You know the lesion.", &vocabulary);

    assert_eq!(cleaned, "You know the lesion.");
}

#[test]
fn test_output_is_lowercased_except_sentence_start() {
    let vocabulary = vocab(&["doppler"], &[]);
    let cleaned = clean("The Doppler STUDY was Clear.", &vocabulary);

    assert_eq!(cleaned, "The doppler study was clear.");
}

#[test]
fn test_deterministic_for_same_input() {
    let vocabulary = vocab(&["patient"], &["acute myocardial infarction"]);
    let text = "Um, the patient has acute myocardial infarction. Okay, well.";

    let first = clean(text, &vocabulary);
    let second = clean(text, &vocabulary);

    assert_eq!(first, second);
}

#[test]
fn test_trigram_checked_before_bigram() {
    // "acute myocardial" alone is also a phrase; the longer match must win
    // so "infarction" stays attached.
    let vocabulary = vocab(&[], &["acute myocardial", "acute myocardial infarction"]);
    let cleaned = clean("Um acute myocardial infarction noted.", &vocabulary);

    assert_eq!(cleaned, "Acute myocardial infarction noted.");
}
