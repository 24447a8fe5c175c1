//! Diagnostic Checks Module
//!
//! Runs the analysis components against fixed reference inputs and reports
//! whether each one still lands on its target. Every check returns its own
//! result; the report is assembled from those values, no shared state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::analysis::{classify_intent, readability_ease, readability_grade, IntentCategory};
use crate::config::Thresholds;
use crate::error::AppError;

pub const CATEGORY_READABILITY: &str = "readability";
pub const CATEGORY_INTENT: &str = "intent";

/// All categories, in run order
pub const CATEGORIES: &[&str] = &[CATEGORY_READABILITY, CATEGORY_INTENT];

const SIMPLE_TEXT: &str = "The cat sat on the mat. It was a good cat.";
const SUPPORT_TEXT: &str =
    "Managing your account is simple. Log in and follow the steps shown on screen.";
const COMPLEX_TEXTS: &[&str] = &[
    "The implementation necessitates comprehensive understanding of multifaceted computational paradigms.",
    "Subsequently, the aforementioned circumstances precipitated unprecedented ramifications.",
    "Notwithstanding the considerable complexities involved, the functionality exhibits remarkable characteristics.",
];
const EDGE_CASE_TEXTS: &[&str] = &[
    "",
    "   \n\t ",
    "...!!!???",
    "🎉🎉 🚀",
    "a",
    "Supercalifragilisticexpialidocious",
    "Antidisestablishmentarianism, institutionalization, incomprehensibilities",
];

// --- Check Result Types ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub category: String,
    pub passed: bool,
    pub duration_us: u64,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, category: &str, duration: Duration, message: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            passed: true,
            duration_us: duration.as_micros() as u64,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(
        name: &str,
        category: &str,
        duration: Duration,
        message: &str,
        details: Option<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            passed: false,
            duration_us: duration.as_micros() as u64,
            message: message.to_string(),
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_us: u64,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
    pub categories: Vec<CategorySummary>,
}

impl DiagnosticReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn from_results(results: Vec<CheckResult>, duration: Duration) -> Self {
        let total_checks = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        let categories = CATEGORIES
            .iter()
            .map(|cat| {
                let cat_results: Vec<_> = results.iter().filter(|r| r.category == *cat).collect();
                CategorySummary {
                    name: cat.to_string(),
                    passed: cat_results.iter().filter(|r| r.passed).count(),
                    failed: cat_results.iter().filter(|r| !r.passed).count(),
                }
            })
            .filter(|summary| summary.passed + summary.failed > 0)
            .collect();

        Self {
            total_checks,
            passed,
            failed: total_checks - passed,
            total_duration_us: duration.as_micros() as u64,
            generated_at: Utc::now(),
            results,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
}

// --- Main Runner ---

fn log_result(result: &CheckResult) {
    if result.passed {
        info!("  ✅ {} - {} ({}µs)", result.name, result.message, result.duration_us);
    } else {
        error!("  ❌ {} - {} ({}µs)", result.name, result.message, result.duration_us);
    }
}

fn checks_for(category: &str, thresholds: &Thresholds) -> Option<Vec<CheckResult>> {
    match category {
        CATEGORY_READABILITY => Some(vec![
            check_simple_text(thresholds),
            check_support_text(thresholds),
            check_complex_text(thresholds),
            check_empty_defaults(),
            check_score_bounds(),
        ]),
        CATEGORY_INTENT => Some(vec![
            check_general_chat(),
            check_content_generation(),
            check_domain_inquiry(),
            check_priority_order(),
        ]),
        _ => None,
    }
}

/// Runs every check and returns the full report
pub fn run_all_checks(thresholds: &Thresholds) -> DiagnosticReport {
    info!("Running diagnostic checks");

    let start = Instant::now();
    let results: Vec<CheckResult> = CATEGORIES
        .iter()
        .filter_map(|cat| checks_for(cat, thresholds))
        .flatten()
        .inspect(log_result)
        .collect();

    let report = DiagnosticReport::from_results(results, start.elapsed());

    info!(
        "Results: {}/{} passed | {} failed | {}µs total",
        report.passed, report.total_checks, report.failed, report.total_duration_us
    );

    report
}

/// Runs the checks for one category only
pub fn run_category_checks(
    category: &str,
    thresholds: &Thresholds,
) -> Result<Vec<CheckResult>, AppError> {
    let results = checks_for(category, thresholds)
        .ok_or_else(|| AppError::UnknownCategory(category.to_string()))?;
    results.iter().for_each(log_result);
    Ok(results)
}

/// Report for a single category
pub fn run_category_report(
    category: &str,
    thresholds: &Thresholds,
) -> Result<DiagnosticReport, AppError> {
    let start = Instant::now();
    let results = run_category_checks(category, thresholds)?;
    Ok(DiagnosticReport::from_results(results, start.elapsed()))
}

// === READABILITY CHECKS ===

fn check_simple_text(thresholds: &Thresholds) -> CheckResult {
    let start = Instant::now();
    let name = "readability_simple_text";

    let grade = readability_grade(SIMPLE_TEXT);
    if grade < thresholds.simple_max_grade {
        CheckResult::pass(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("Grade {:.2} < {:.1}", grade, thresholds.simple_max_grade),
        )
    } else {
        CheckResult::fail(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!(
                "Simple text scored grade {:.2}, expected < {:.1}",
                grade, thresholds.simple_max_grade
            ),
            Some(SIMPLE_TEXT.to_string()),
        )
    }
}

fn check_support_text(thresholds: &Thresholds) -> CheckResult {
    let start = Instant::now();
    let name = "readability_support_text";

    let grade = readability_grade(SUPPORT_TEXT);
    if grade <= thresholds.support_max_grade {
        CheckResult::pass(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("Grade {:.2} <= {:.1}", grade, thresholds.support_max_grade),
        )
    } else {
        CheckResult::fail(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!(
                "Support text scored grade {:.2}, expected <= {:.1}",
                grade, thresholds.support_max_grade
            ),
            Some(SUPPORT_TEXT.to_string()),
        )
    }
}

fn check_complex_text(thresholds: &Thresholds) -> CheckResult {
    let start = Instant::now();
    let name = "readability_complex_text";

    let grades: Vec<f64> = COMPLEX_TEXTS.iter().map(|t| readability_grade(t)).collect();
    let average = grades.iter().sum::<f64>() / grades.len() as f64;

    if average > thresholds.complex_min_grade {
        CheckResult::pass(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("Average grade {:.2} > {:.1}", average, thresholds.complex_min_grade),
        )
    } else {
        CheckResult::fail(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!(
                "Complex text averaged grade {:.2}, expected > {:.1}",
                average, thresholds.complex_min_grade
            ),
            Some(format!("Per-text grades: {:?}", grades)),
        )
    }
}

fn check_empty_defaults() -> CheckResult {
    let start = Instant::now();
    let name = "readability_empty_defaults";

    let grade = readability_grade("");
    let ease = readability_ease("");
    if grade == 0.0 && ease == 100.0 {
        CheckResult::pass(name, CATEGORY_READABILITY, start.elapsed(), "grade=0, ease=100")
    } else {
        CheckResult::fail(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("Expected grade=0 and ease=100, got grade={} ease={}", grade, ease),
            None,
        )
    }
}

fn check_score_bounds() -> CheckResult {
    let start = Instant::now();
    let name = "readability_score_bounds";

    let out_of_bounds: Vec<String> = EDGE_CASE_TEXTS
        .iter()
        .chain(COMPLEX_TEXTS)
        .filter_map(|text| {
            let grade = readability_grade(text);
            let ease = readability_ease(text);
            let in_bounds = grade >= 0.0 && (0.0..=100.0).contains(&ease);
            (!in_bounds).then(|| format!("{:?}: grade={} ease={}", text, grade, ease))
        })
        .collect();

    if out_of_bounds.is_empty() {
        CheckResult::pass(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("{} texts within bounds", EDGE_CASE_TEXTS.len() + COMPLEX_TEXTS.len()),
        )
    } else {
        CheckResult::fail(
            name,
            CATEGORY_READABILITY,
            start.elapsed(),
            &format!("{} texts out of bounds", out_of_bounds.len()),
            Some(out_of_bounds.join("\n")),
        )
    }
}

// === INTENT CHECKS ===

fn check_intents(name: &str, expected: IntentCategory, texts: &[&str]) -> CheckResult {
    let start = Instant::now();

    let mismatches: Vec<String> = texts
        .iter()
        .filter_map(|text| {
            let actual = classify_intent(text);
            (actual != expected).then(|| format!("'{}' -> {}", text, actual))
        })
        .collect();

    if mismatches.is_empty() {
        CheckResult::pass(
            name,
            CATEGORY_INTENT,
            start.elapsed(),
            &format!("{} texts classified as {}", texts.len(), expected),
        )
    } else {
        CheckResult::fail(
            name,
            CATEGORY_INTENT,
            start.elapsed(),
            &format!("Expected {}, got mismatches", expected),
            Some(mismatches.join(", ")),
        )
    }
}

fn check_general_chat() -> CheckResult {
    check_intents(
        "intent_general_chat",
        IntentCategory::GeneralChat,
        &["hello", "thanks", "bye"],
    )
}

fn check_content_generation() -> CheckResult {
    check_intents(
        "intent_content_generation",
        IntentCategory::ContentGeneration,
        &["write a push notification", "create an email"],
    )
}

fn check_domain_inquiry() -> CheckResult {
    check_intents(
        "intent_domain_inquiry",
        IntentCategory::DomainInquiry,
        &["jio recharge", "jio fiber plans"],
    )
}

fn check_priority_order() -> CheckResult {
    check_intents(
        "intent_priority_order",
        IntentCategory::ContentGeneration,
        &["hello, please create a draft"],
    )
}
