//! Analysis Module Tests
//!
//! Invariants of the tokenizer, syllable estimator, readability formulas
//! and intent classifier, checked over a corpus of awkward inputs.

use crate::analysis::{
    classify_intent, count_sentences, count_syllables, count_syllables_in_word,
    flesch_kincaid_grade, readability_ease, readability_grade, word_count, words,
    IntentCategory, IntentClassifier, TextAnalyzer, TextStats,
};

const CORPUS: &[&str] = &[
    "",
    " ",
    "\n\n\t",
    "Hello",
    "...",
    "?!?!",
    "🎉",
    "Emoji only 🎉🎉🎉 here!",
    "Ünïcödé wörds, naïve café.",
    "a b c d e f g h i j k l m n o p",
    "The cat sat on the mat. It was a good cat.",
    "Managing your account is simple. Log in and follow the steps shown on screen.",
    "Incomprehensibilities notwithstanding, institutionalization predominates.",
    "one-word-with-hyphens-and-no-spaces-at-all-for-a-very-long-stretch",
    "Numbers 1 2 3 4 5 and symbols # $ % & *",
];

const COMPLEX_TEXTS: &[&str] = &[
    "The implementation necessitates comprehensive understanding of multifaceted computational paradigms.",
    "Subsequently, the aforementioned circumstances precipitated unprecedented ramifications.",
    "Notwithstanding the considerable complexities involved, the functionality exhibits remarkable characteristics.",
];

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_sentence_count_is_at_least_one() {
        for text in CORPUS {
            assert!(count_sentences(text) >= 1, "for {:?}", text);
        }
    }

    #[test]
    fn test_words_are_never_empty() {
        for text in CORPUS {
            let tokens = words(text);
            assert_eq!(tokens.len(), word_count(text), "for {:?}", text);
            assert!(
                tokens.iter().all(|w| !w.trim().is_empty()),
                "empty token in {:?}",
                text
            );
        }
    }

    #[test]
    fn test_words_preserve_order() {
        assert_eq!(
            words("Log in\tand\nfollow"),
            vec!["Log", "in", "and", "follow"]
        );
    }
}

#[cfg(test)]
mod syllable_tests {
    use super::*;

    #[test]
    fn test_every_word_has_a_syllable() {
        for text in CORPUS {
            for word in words(text) {
                assert!(count_syllables_in_word(word) >= 1, "for {:?}", word);
            }
        }
    }

    #[test]
    fn test_text_total_is_at_least_word_count() {
        for text in CORPUS {
            assert!(count_syllables(text) >= word_count(text), "for {:?}", text);
        }
    }

    #[test]
    fn test_known_counts() {
        let cases = [
            ("managing", 3),
            ("account", 2),
            ("comprehensive", 4),
            ("computational", 5),
            ("paradigms", 3),
            ("multifaceted", 5),
        ];

        for (word, expected) in cases {
            assert_eq!(count_syllables_in_word(word), expected, "for '{}'", word);
        }
    }
}

#[cfg(test)]
mod readability_tests {
    use super::*;

    #[test]
    fn test_scores_stay_in_bounds() {
        for text in CORPUS.iter().chain(COMPLEX_TEXTS) {
            let grade = readability_grade(text);
            let ease = readability_ease(text);
            assert!(grade >= 0.0, "grade {} for {:?}", grade, text);
            assert!((0.0..=100.0).contains(&ease), "ease {} for {:?}", ease, text);
        }
    }

    #[test]
    fn test_empty_defaults_diverge() {
        assert_eq!(readability_grade(""), 0.0);
        assert_eq!(readability_ease(""), 100.0);
    }

    #[test]
    fn test_simple_text_grade() {
        let grade = readability_grade("The cat sat on the mat. It was a good cat.");
        assert!(grade < 6.0, "grade was {}", grade);
    }

    #[test]
    fn test_support_text_grade() {
        let grade = readability_grade(
            "Managing your account is simple. Log in and follow the steps shown on screen.",
        );
        assert!(grade <= 10.0, "grade was {}", grade);
    }

    #[test]
    fn test_complex_text_average_grade() {
        let total: f64 = COMPLEX_TEXTS.iter().map(|t| readability_grade(t)).sum();
        let average = total / COMPLEX_TEXTS.len() as f64;
        assert!(average > 10.0, "average was {}", average);
    }

    #[test]
    fn test_complex_text_is_harder_than_simple() {
        let simple = readability_ease("The cat sat on the mat. It was a good cat.");
        for text in COMPLEX_TEXTS {
            assert!(readability_ease(text) < simple, "for {:?}", text);
        }
    }

    #[test]
    fn test_grade_monotonic_in_syllables() {
        for (sentences, words) in [(1, 5), (3, 12), (10, 100)] {
            let grades: Vec<f64> = (words..words * 4)
                .map(|syllables| flesch_kincaid_grade(&TextStats::new(sentences, words, syllables)))
                .collect();
            assert!(
                grades.windows(2).all(|pair| pair[1] >= pair[0]),
                "non-monotonic for {} sentences / {} words",
                sentences,
                words
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for text in COMPLEX_TEXTS {
            assert_eq!(
                readability_grade(text).to_bits(),
                readability_grade(text).to_bits()
            );
            assert_eq!(
                readability_ease(text).to_bits(),
                readability_ease(text).to_bits()
            );
        }
    }
}

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            ("hello", IntentCategory::GeneralChat),
            ("thanks", IntentCategory::GeneralChat),
            ("bye", IntentCategory::GeneralChat),
            ("write a push notification", IntentCategory::ContentGeneration),
            ("create an email", IntentCategory::ContentGeneration),
            ("jio recharge", IntentCategory::DomainInquiry),
            ("jio fiber plans", IntentCategory::DomainInquiry),
            ("hello, please create a draft", IntentCategory::ContentGeneration),
        ];

        for (text, expected) in cases {
            assert_eq!(classify_intent(text), expected, "for '{}'", text);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_intent("JIO RECHARGE"), IntentCategory::DomainInquiry);
        assert_eq!(classify_intent("Write An SMS"), IntentCategory::ContentGeneration);
    }

    #[test]
    fn test_every_corpus_text_gets_a_category() {
        let classifier = IntentClassifier::new();
        for text in CORPUS {
            let result = classifier.classify(text);
            assert!(IntentCategory::ALL.contains(&result.intent), "for {:?}", text);
        }
    }

    #[test]
    fn test_builtin_rule_order() {
        let order: Vec<IntentCategory> = IntentClassifier::new()
            .rules()
            .iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(order, IntentCategory::ALL.to_vec());
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_analyzer_matches_free_functions() {
        let analyzer = TextAnalyzer::new();

        for text in CORPUS.iter().chain(COMPLEX_TEXTS) {
            let report = analyzer.analyze(text);
            assert_eq!(report.readability.grade, readability_grade(text));
            assert_eq!(report.readability.ease, readability_ease(text));
            assert_eq!(report.readability.stats.words, word_count(text));
            assert_eq!(report.readability.stats.sentences, count_sentences(text));
            assert_eq!(report.readability.stats.syllables, count_syllables(text));
            assert_eq!(report.intent.intent, classify_intent(text));
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Text biased towards the characters the tokenizer and syllable
    /// counter care about, mixed with arbitrary Unicode.
    fn text_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            "[a-zA-Z .!?,'\t\n-]{0,200}",
            "([aeiouy]{1,3}[bcdfghklmnprst]{0,2}e? ?[.!?]?){0,40}",
            "[🎉é ü.]{0,30}",
        ]
    }

    proptest! {
        /// Property: every text has at least one sentence.
        #[test]
        fn sentence_count_at_least_one(text in text_strategy()) {
            prop_assert!(count_sentences(&text) >= 1);
        }

        /// Property: tokens are non-empty, whitespace-free and agree with word_count.
        #[test]
        fn words_never_empty(text in text_strategy()) {
            let tokens = words(&text);
            prop_assert_eq!(tokens.len(), word_count(&text));
            for token in tokens {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace), "token {:?}", token);
            }
        }

        /// Property: any non-empty word counts at least one syllable.
        #[test]
        fn syllables_at_least_one(
            word in any::<String>().prop_filter("non-empty", |w| !w.is_empty())
        ) {
            prop_assert!(count_syllables_in_word(&word) >= 1);
        }

        /// Property: reading ease stays within [0, 100].
        #[test]
        fn ease_within_bounds(text in text_strategy()) {
            let ease = readability_ease(&text);
            prop_assert!((0.0..=100.0).contains(&ease), "ease {} for {:?}", ease, text);
        }

        /// Property: grade level is never negative.
        #[test]
        fn grade_never_negative(text in text_strategy()) {
            let grade = readability_grade(&text);
            prop_assert!(grade >= 0.0 && grade.is_finite(), "grade {} for {:?}", grade, text);
        }

        /// Property: more syllables never lower the grade when sentence and word counts are fixed.
        #[test]
        fn grade_monotonic_in_syllables(
            sentences in 0usize..50,
            word_total in 0usize..500,
            syllables in 0usize..2000,
            extra in 1usize..500
        ) {
            let fewer = flesch_kincaid_grade(&TextStats::new(sentences, word_total, syllables));
            let more =
                flesch_kincaid_grade(&TextStats::new(sentences, word_total, syllables + extra));
            prop_assert!(more >= fewer, "{} < {}", more, fewer);
        }
    }
}
