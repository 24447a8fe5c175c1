//! Heuristic syllable estimation.
//!
//! Counts vowel groups instead of looking words up in a dictionary, with a
//! silent-e adjustment. Irregular words ("simple", "fire") come out wrong;
//! the readability thresholds are tuned against exactly this behavior, so
//! it must not be "improved".

use super::tokenizer;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllables in a single word. Always at least 1.
pub fn count_syllables_in_word(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut count = 0;
    let mut prev_was_vowel = false;

    for c in cleaned.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }

    // silent e
    if cleaned.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Total estimated syllables over every word in the text
pub fn count_syllables(text: &str) -> usize {
    tokenizer::words(text)
        .into_iter()
        .map(count_syllables_in_word)
        .sum()
}
