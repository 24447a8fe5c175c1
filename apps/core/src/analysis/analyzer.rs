//! Text Analyzer - runs readability scoring and intent classification
//! over one text and bundles the results.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::intent::{IntentClassifier, IntentResult};
use super::readability::{ReadabilityMetrics, ReadabilityScorer};

/// Combined analysis of one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Original input
    pub text: String,

    /// Grade, ease and the counts behind them
    pub readability: ReadabilityMetrics,

    /// Detected intent
    pub intent: IntentResult,

    /// Wall time spent analyzing, in microseconds
    pub processing_time_us: u64,
}

impl AnalysisReport {
    /// One-line summary for logs and terminal output
    pub fn summary(&self) -> String {
        format!(
            "Intent: {}, Grade: {:.1}, Ease: {:.1} ({}), Words: {}, Sentences: {}",
            self.intent.intent,
            self.readability.grade,
            self.readability.ease,
            self.readability.band,
            self.readability.stats.words,
            self.readability.stats.sentences,
        )
    }
}

/// Runs every analysis component over a text
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    readability_scorer: ReadabilityScorer,
    intent_classifier: IntentClassifier,
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom intent classifier (e.g. with application-specific rules)
    pub fn with_classifier(intent_classifier: IntentClassifier) -> Self {
        Self {
            readability_scorer: ReadabilityScorer::new(),
            intent_classifier,
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();

        let readability = self.readability_scorer.analyze(text);
        let intent = self.intent_classifier.classify(text);

        let report = AnalysisReport {
            text: text.to_string(),
            readability,
            intent,
            processing_time_us: start.elapsed().as_micros() as u64,
        };

        debug!(
            words = report.readability.stats.words,
            grade = report.readability.grade,
            intent = %report.intent.intent,
            "Analyzed text"
        );

        report
    }
}
