//! TextLens core: readability scoring and keyword intent classification.
//!
//! ```
//! use textlens_core::analysis::{classify_intent, readability_grade, IntentCategory};
//!
//! assert!(readability_grade("The cat sat on the mat.") < 6.0);
//! assert_eq!(classify_intent("jio recharge"), IntentCategory::DomainInquiry);
//! ```

pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logging;

#[cfg(test)]
mod tests;

pub use analysis::{
    classify_intent, readability_ease, readability_grade, AnalysisReport, IntentCategory,
    TextAnalyzer,
};
pub use config::AppConfig;
pub use error::AppError;
