//! Keyword-based video content analysis.
//!
//! Turns a video's title and description into a structured [`Analysis`]:
//! a templated summary, up to four key points, a coarse sentiment label and
//! up to five topics. Matching is plain case-insensitive substring containment
//! against fixed keyword tables, so the result is fully deterministic.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

/// Ordered topic vocabulary. Extraction keeps this order, not the order of
/// appearance in the text.
const TOPIC_KEYWORDS: &[&str] = &[
    "javascript", "python", "react", "node", "typescript", "api",
    "database", "cloud", "tutorial", "programming", "development",
    "design", "architecture", "testing", "deployment", "security",
    "performance", "optimization", "machine learning", "ai", "data",
];

const MAX_TOPICS: usize = 5;
const MAX_KEY_POINTS: usize = 4;

const FALLBACK_TOPICS: &[&str] = &["Technology", "Tutorial", "Education"];

const DEFAULT_KEY_POINTS: &[&str] = &[
    "Provides valuable insights on the topic",
    "Well-structured educational content",
    "Suitable for skill development",
];

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "best", "great", "amazing", "excellent", "complete", "comprehensive", "perfect",
    ].into_iter().collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "mistake", "avoid", "problem", "issue", "error", "wrong", "bad",
    ].into_iter().collect()
});

/// A key point emitted when the content contains any of `triggers`.
struct KeyPointRule {
    triggers: &'static [&'static str],
    statement: &'static str,
}

impl KeyPointRule {
    fn matches(&self, content: &str) -> bool {
        self.triggers.iter().any(|t| content.contains(t))
    }
}

// Evaluated top to bottom; output keeps this order.
const KEY_POINT_RULES: &[KeyPointRule] = &[
    KeyPointRule {
        triggers: &["introduction", "beginner"],
        statement: "Covers fundamental concepts and basics",
    },
    KeyPointRule {
        triggers: &["advanced", "expert"],
        statement: "Explores advanced techniques and patterns",
    },
    KeyPointRule {
        triggers: &["best practice", "2024"],
        statement: "Includes modern best practices and current standards",
    },
    KeyPointRule {
        triggers: &["tutorial", "step"],
        statement: "Provides step-by-step instructions",
    },
    KeyPointRule {
        triggers: &["mistake", "avoid"],
        statement: "Highlights common pitfalls to avoid",
    },
    KeyPointRule {
        triggers: &["example", "demo"],
        statement: "Includes practical examples and demonstrations",
    },
];

/// Overall tone of a video. Negative-leaning content is labelled
/// `Informative` rather than negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Informative,
}

/// Structured analysis of a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub summary: String,
    /// Between one and four statements, in rule order.
    pub key_points: Vec<String>,
    pub sentiment: Sentiment,
    /// Between one and five title-cased topics, in vocabulary order.
    pub topics: Vec<String>,
}

/// Analyzes a video's title and description. Never fails; empty input falls
/// back to the default topics and key points.
pub fn analyze(title: &str, description: &str) -> Analysis {
    let content = format!("{} {}", title, description).to_lowercase();

    let topics = extract_topics(&content);
    let sentiment = classify_sentiment(&content);
    let summary = build_summary(&content, &topics);
    let key_points = derive_key_points(&content);

    Analysis {
        summary,
        key_points,
        sentiment,
        topics: topics.iter().map(|t| title_case(t)).collect(),
    }
}

fn extract_topics(content: &str) -> Vec<&'static str> {
    let topics: Vec<&'static str> = TOPIC_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| content.contains(keyword))
        .take(MAX_TOPICS)
        .collect();

    if topics.is_empty() {
        FALLBACK_TOPICS.to_vec()
    } else {
        topics
    }
}

fn classify_sentiment(content: &str) -> Sentiment {
    let positive_count = POSITIVE_WORDS.iter().filter(|w| content.contains(*w)).count();
    let negative_count = NEGATIVE_WORDS.iter().filter(|w| content.contains(*w)).count();

    tracing::debug!(positive_count, negative_count, "sentiment keyword matches");

    if positive_count > negative_count {
        Sentiment::Positive
    } else if negative_count > positive_count {
        Sentiment::Informative
    } else {
        Sentiment::Neutral
    }
}

fn build_summary(content: &str, topics: &[&str]) -> String {
    let covered = topics.iter().take(2).copied().collect::<Vec<_>>().join(" and ");

    let level = if content.contains("beginner") {
        "beginner-friendly"
    } else if content.contains("advanced") {
        "advanced"
    } else {
        "comprehensive"
    };

    let closing = if content.contains("tutorial") {
        "The tutorial format makes it easy to follow along."
    } else if content.contains("best practice") {
        "It focuses on industry best practices and standards."
    } else {
        "The content is well-structured for learning."
    };

    format!("This video covers {}, providing {} insights. {}", covered, level, closing)
}

fn derive_key_points(content: &str) -> Vec<String> {
    let points: Vec<String> = KEY_POINT_RULES
        .iter()
        .filter(|rule| rule.matches(content))
        .take(MAX_KEY_POINTS)
        .map(|rule| rule.statement.to_string())
        .collect();

    if points.is_empty() {
        DEFAULT_KEY_POINTS.iter().map(|p| p.to_string()).collect()
    } else {
        points
    }
}

/// Upper-cases the first character and leaves the rest untouched.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_fallbacks() {
        let analysis = analyze("", "");
        assert_eq!(analysis.topics, vec!["Technology", "Tutorial", "Education"]);
        assert_eq!(analysis.key_points, DEFAULT_KEY_POINTS);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(
            analysis.summary,
            "This video covers Technology and Tutorial, providing comprehensive insights. \
             The content is well-structured for learning."
        );
    }

    #[test]
    fn test_positive_sentiment() {
        let analysis = analyze("An amazing talk", "Great overview of the field");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_negative_leaning_is_informative() {
        let analysis = analyze("Common problems", "What goes wrong and why");
        assert_eq!(analysis.sentiment, Sentiment::Informative);
    }

    #[test]
    fn test_sentiment_tie_is_neutral() {
        let analysis = analyze("The best things to avoid", "");
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        // "great" twice still loses to two distinct negatives
        let analysis = analyze("great great", "bad error");
        assert_eq!(analysis.sentiment, Sentiment::Informative);
    }

    #[test]
    fn test_topics_follow_vocabulary_order() {
        let analysis = analyze("Python vs JavaScript", "");
        assert_eq!(analysis.topics[0], "Javascript");
        assert_eq!(analysis.topics[1], "Python");
    }

    #[test]
    fn test_topics_capped_at_five() {
        let analysis = analyze(
            "javascript python react node typescript api database cloud",
            "",
        );
        assert_eq!(
            analysis.topics,
            vec!["Javascript", "Python", "React", "Node", "Typescript"]
        );
    }

    #[test]
    fn test_multi_word_topic_is_title_cased_on_first_letter_only() {
        let analysis = analyze("Intro to Machine Learning", "");
        assert_eq!(analysis.topics, vec!["Machine learning"]);
    }

    #[test]
    fn test_summary_uses_matched_topics_and_qualifiers() {
        let analysis = analyze("Python tutorial for beginners", "");
        assert_eq!(
            analysis.summary,
            "This video covers python and tutorial, providing beginner-friendly insights. \
             The tutorial format makes it easy to follow along."
        );
    }

    #[test]
    fn test_summary_best_practice_closing() {
        let analysis = analyze("Advanced cloud best practices", "");
        assert_eq!(
            analysis.summary,
            "This video covers cloud, providing advanced insights. \
             It focuses on industry best practices and standards."
        );
    }

    #[test]
    fn test_key_points_in_rule_order_and_truncated() {
        let analysis = analyze(
            "Beginner to expert: best practices, step by step",
            "Avoid mistakes with a demo",
        );
        assert_eq!(
            analysis.key_points,
            vec![
                "Covers fundamental concepts and basics",
                "Explores advanced techniques and patterns",
                "Includes modern best practices and current standards",
                "Provides step-by-step instructions",
            ]
        );
    }

    #[test]
    fn test_single_key_point() {
        let analysis = analyze("Live demo", "");
        assert_eq!(
            analysis.key_points,
            vec!["Includes practical examples and demonstrations"]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyze("Rust Best Practices 2024", "Learn the best practices");
        let b = analyze("Rust Best Practices 2024", "Learn the best practices");
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_hold_for_varied_input() {
        let samples = [
            ("x", "y"),
            ("Common Rust Mistakes to Avoid", "Avoid these common mistakes"),
            ("日本語のタイトル", "説明"),
            ("ÉCOLE", "ß"),
        ];
        for (title, description) in samples {
            let analysis = analyze(title, description);
            assert!((1..=MAX_TOPICS).contains(&analysis.topics.len()));
            assert!((1..=MAX_KEY_POINTS).contains(&analysis.key_points.len()));
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(analyze("", "")).unwrap();
        assert!(json.get("keyPoints").is_some());
        assert_eq!(json["sentiment"], "neutral");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("api"), "Api");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("Data"), "Data");
    }
}
