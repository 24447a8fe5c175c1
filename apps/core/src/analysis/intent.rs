//! Intent Classification using keyword lists.
//!
//! Rules are checked in priority order and the first rule with any keyword
//! present wins. Matching is plain substring search on the lower-cased text,
//! so "hi" also matches inside "this". Recall over precision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Intent category for a short text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentCategory {
    /// Request to produce marketing or messaging content
    ContentGeneration,
    /// Question about the product domain (plans, recharge, etc.)
    DomainInquiry,
    /// Small talk, and the fallback when nothing matches
    #[default]
    GeneralChat,
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 3] = [
        IntentCategory::ContentGeneration,
        IntentCategory::DomainInquiry,
        IntentCategory::GeneralChat,
    ];

    /// Returns the wire label for the category
    pub fn label(&self) -> &'static str {
        match self {
            IntentCategory::ContentGeneration => "content-generation",
            IntentCategory::DomainInquiry => "domain-inquiry",
            IntentCategory::GeneralChat => "general-chat",
        }
    }
}

const CONTENT_GENERATION_KEYWORDS: &[&str] = &[
    "write",
    "create",
    "draft",
    "generate",
    "compose",
    "push notification",
    "notification",
    "email",
    "sms",
    "banner",
    "caption",
    "headline",
    "tagline",
    "copy for",
];

const DOMAIN_INQUIRY_KEYWORDS: &[&str] = &[
    "jio",
    "recharge",
    "fiber",
    "prepaid",
    "postpaid",
    "5g",
    "broadband",
    "tariff",
    "data pack",
    "plans",
    "sim card",
    "balance",
];

const GENERAL_CHAT_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
    "good morning",
    "how are you",
];

/// One category and the keywords that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub category: IntentCategory,
    pub keywords: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(category: IntentCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    /// First keyword contained in `text_lower`
    fn first_match(&self, text_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| !k.is_empty() && text_lower.contains(k))
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected category
    pub intent: IntentCategory,
    /// Keyword that decided it; `None` when the fallback was used
    pub matched_keyword: Option<String>,
}

impl IntentResult {
    fn fallback() -> Self {
        Self {
            intent: IntentCategory::GeneralChat,
            matched_keyword: None,
        }
    }
}

/// Intent classifier over an ordered rule list
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the built-in rules.
    /// Priority: content generation, domain inquiry, general chat.
    pub fn new() -> Self {
        Self::with_rules(vec![
            IntentRule::new(
                IntentCategory::ContentGeneration,
                CONTENT_GENERATION_KEYWORDS.iter().copied(),
            ),
            IntentRule::new(
                IntentCategory::DomainInquiry,
                DOMAIN_INQUIRY_KEYWORDS.iter().copied(),
            ),
            IntentRule::new(
                IntentCategory::GeneralChat,
                GENERAL_CHAT_KEYWORDS.iter().copied(),
            ),
        ])
    }

    /// Create a classifier with custom rules, checked in the given order
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> IntentResult {
        let text_lower = text.to_lowercase();

        self.rules
            .iter()
            .find_map(|rule| {
                rule.first_match(&text_lower).map(|keyword| IntentResult {
                    intent: rule.category,
                    matched_keyword: Some(keyword.to_string()),
                })
            })
            .unwrap_or_else(IntentResult::fallback)
    }
}

/// Built-in classifier, created on first use
static DEFAULT_CLASSIFIER: OnceLock<IntentClassifier> = OnceLock::new();

fn default_classifier() -> &'static IntentClassifier {
    DEFAULT_CLASSIFIER.get_or_init(IntentClassifier::new)
}

/// Classify with the built-in rules
pub fn classify_intent(text: &str) -> IntentCategory {
    default_classifier().classify(text).intent
}
