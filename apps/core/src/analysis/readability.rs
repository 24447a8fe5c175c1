//! Readability Scoring.
//!
//! Classic Flesch formulas over sentence, word and syllable counts:
//! - Flesch-Kincaid Grade: U.S. school grade needed to follow the text
//! - Flesch Reading Ease: 0 (very hard) to 100 (very easy)
//!
//! Both are total functions. Degenerate input (no words) falls back to a
//! fixed default, and the two defaults differ on purpose: grade 0, ease 100.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::syllables;
use super::tokenizer;

/// Raw counts the formulas are computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStats {
    /// Sentence count (at least 1 for any text)
    pub sentences: usize,
    /// Whitespace-separated word count
    pub words: usize,
    /// Estimated syllables summed over all words
    pub syllables: usize,
}

impl TextStats {
    pub fn new(sentences: usize, words: usize, syllables: usize) -> Self {
        Self {
            sentences,
            words,
            syllables,
        }
    }

    /// Tokenize the text once and count everything
    pub fn from_text(text: &str) -> Self {
        let words = tokenizer::words(text);
        let syllables = words
            .iter()
            .map(|w| syllables::count_syllables_in_word(w))
            .sum();

        Self {
            sentences: tokenizer::count_sentences(text),
            words: words.len(),
            syllables,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.sentences == 0 || self.words == 0
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }
}

/// Flesch-Kincaid grade level, floored at 0
pub fn flesch_kincaid_grade(stats: &TextStats) -> f64 {
    if stats.is_degenerate() {
        return 0.0;
    }

    let grade =
        0.39 * stats.words_per_sentence() + 11.8 * stats.syllables_per_word() - 15.59;
    grade.max(0.0)
}

/// Flesch reading ease, clamped to [0, 100]
pub fn flesch_reading_ease(stats: &TextStats) -> f64 {
    if stats.is_degenerate() {
        return 100.0;
    }

    let ease =
        206.835 - 1.015 * stats.words_per_sentence() - 84.6 * stats.syllables_per_word();
    ease.clamp(0.0, 100.0)
}

/// Grade level of raw text
pub fn readability_grade(text: &str) -> f64 {
    flesch_kincaid_grade(&TextStats::from_text(text))
}

/// Reading ease of raw text
pub fn readability_ease(text: &str) -> f64 {
    flesch_reading_ease(&TextStats::from_text(text))
}

/// Standard interpretation bands for a reading ease score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingBand {
    /// 90-100, roughly 5th grade
    VeryEasy,
    /// 80-89
    Easy,
    /// 70-79
    FairlyEasy,
    /// 60-69, plain English
    Standard,
    /// 50-59
    FairlyDifficult,
    /// 30-49, college level
    Difficult,
    /// Below 30, college graduate
    VeryConfusing,
}

impl ReadingBand {
    pub fn from_ease(ease: f64) -> Self {
        match ease {
            e if e >= 90.0 => ReadingBand::VeryEasy,
            e if e >= 80.0 => ReadingBand::Easy,
            e if e >= 70.0 => ReadingBand::FairlyEasy,
            e if e >= 60.0 => ReadingBand::Standard,
            e if e >= 50.0 => ReadingBand::FairlyDifficult,
            e if e >= 30.0 => ReadingBand::Difficult,
            _ => ReadingBand::VeryConfusing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingBand::VeryEasy => "very_easy",
            ReadingBand::Easy => "easy",
            ReadingBand::FairlyEasy => "fairly_easy",
            ReadingBand::Standard => "standard",
            ReadingBand::FairlyDifficult => "fairly_difficult",
            ReadingBand::Difficult => "difficult",
            ReadingBand::VeryConfusing => "very_confusing",
        }
    }

    /// Approximate audience for the band
    pub fn audience(&self) -> &'static str {
        match self {
            ReadingBand::VeryEasy => "5th grade",
            ReadingBand::Easy => "6th grade",
            ReadingBand::FairlyEasy => "7th grade",
            ReadingBand::Standard => "8th-9th grade",
            ReadingBand::FairlyDifficult => "10th-12th grade",
            ReadingBand::Difficult => "college",
            ReadingBand::VeryConfusing => "college graduate",
        }
    }
}

impl fmt::Display for ReadingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Readability metrics for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Counts the scores were computed from
    pub stats: TextStats,
    /// Flesch-Kincaid grade level (>= 0)
    pub grade: f64,
    /// Flesch reading ease (0 - 100)
    pub ease: f64,
    /// Interpretation of `ease`
    pub band: ReadingBand,
}

/// Computes [`ReadabilityMetrics`] from raw text
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> ReadabilityMetrics {
        let stats = TextStats::from_text(text);
        let ease = flesch_reading_ease(&stats);

        ReadabilityMetrics {
            stats,
            grade: flesch_kincaid_grade(&stats),
            ease,
            band: ReadingBand::from_ease(ease),
        }
    }
}
