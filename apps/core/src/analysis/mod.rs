//! # Analysis Module
//!
//! Deterministic, dependency-free text analysis for TextLens.
//!
//! ## Components
//! - `tokenizer`: sentence and word splitting
//! - `syllables`: heuristic per-word syllable counts
//! - `readability`: Flesch-Kincaid grade and Flesch reading ease
//! - `intent`: keyword-based intent classification
//! - `analyzer`: runs everything over one text

pub mod analyzer;
pub mod intent;
pub mod readability;
pub mod syllables;
pub mod tokenizer;

pub use analyzer::{AnalysisReport, TextAnalyzer};
pub use intent::{classify_intent, IntentCategory, IntentClassifier, IntentResult, IntentRule};
pub use readability::{
    flesch_kincaid_grade, flesch_reading_ease, readability_ease, readability_grade,
    ReadabilityMetrics, ReadabilityScorer, ReadingBand, TextStats,
};
pub use syllables::{count_syllables, count_syllables_in_word};
pub use tokenizer::{count_sentences, word_count, words};
