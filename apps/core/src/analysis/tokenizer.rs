//! Sentence and word tokenization.
//!
//! Plain character classification, no regex: a sentence boundary is a run of
//! `.`, `!` or `?`, and words are whitespace-separated fragments.

/// Characters that terminate a sentence
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Count sentences in text.
///
/// Each maximal run of terminators counts once, so `"Wait... what?!"` is two
/// sentences. Text without any terminator is still one sentence.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;

    for c in text.chars() {
        if is_terminator(c) {
            if !in_run {
                count += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }

    count.max(1)
}

/// Split text into words on any whitespace, keeping order and case.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
