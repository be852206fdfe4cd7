//! Input intent classification.
//!
//! A pure function over a single string: no external state, no error
//! conditions, every input produces exactly one [`Intent`]. Rules are
//! evaluated in order; the first match wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Intent;

/// Explicit AI trigger: `ask ` / `ai ` (whitespace required) or `/ai`
/// (whitespace optional). The match is stripped from the query.
#[allow(clippy::expect_used)]
static AI_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:ask|ai)\s+|/ai\s*)").expect("AI trigger pattern is valid")
});

/// Bare-hostname/URL shape: optional scheme, dot-separated labels ending
/// in a label of at least two letters, optional path.
#[allow(clippy::expect_used)]
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?([a-z0-9-]+\.)+[a-z]{2,}(/.*)?$")
        .expect("URL shape pattern is valid")
});

/// Leading tokens that mark an input as a question for the AI engine.
const QUESTION_WORDS: [&str; 8] = [
    "how", "what", "why", "who", "when", "code", "debug", "write",
];

/// Classify raw address-bar input into exactly one [`Intent`].
///
/// URL interpretation deliberately wins over search for any
/// whitespace-free input matching the hostname shape, even when the user
/// may have meant a search.
#[must_use]
pub fn classify(input: &str) -> Intent {
    let input = input.trim();
    if input.is_empty() {
        return Intent::Search {
            query: String::new(),
        };
    }

    if let Some(trigger) = AI_TRIGGER.find(input) {
        return Intent::Ai {
            query: input[trigger.end()..].to_string(),
        };
    }

    if URL_SHAPE.is_match(input) && !input.contains(char::is_whitespace) {
        return Intent::Url {
            target: input.to_string(),
        };
    }

    let first_word = input.split_whitespace().next().unwrap_or_default();
    if input.ends_with('?') || QUESTION_WORDS.contains(&first_word.to_ascii_lowercase().as_str()) {
        return Intent::Ai {
            query: input.to_string(),
        };
    }

    Intent::Search {
        query: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(query: &str) -> Intent {
        Intent::Ai {
            query: query.to_string(),
        }
    }

    fn search(query: &str) -> Intent {
        Intent::Search {
            query: query.to_string(),
        }
    }

    fn url(target: &str) -> Intent {
        Intent::Url {
            target: target.to_string(),
        }
    }

    // ==================== rule 1: empty ====================

    #[test]
    fn test_empty_input_is_empty_search() {
        assert_eq!(classify(""), search(""));
        assert_eq!(classify("   "), search(""));
    }

    // ==================== rule 2: AI triggers ====================

    #[test]
    fn test_ask_prefix_strips_trigger() {
        assert_eq!(classify("ask weather tomorrow"), ai("weather tomorrow"));
    }

    #[test]
    fn test_ai_prefix_strips_trigger() {
        assert_eq!(classify("ai summarize this page"), ai("summarize this page"));
    }

    #[test]
    fn test_slash_ai_prefix() {
        assert_eq!(classify("/ai explain lifetimes"), ai("explain lifetimes"));
        assert_eq!(classify("/ai"), ai(""));
    }

    #[test]
    fn test_triggers_are_case_insensitive() {
        assert_eq!(classify("ASK me anything"), ai("me anything"));
        assert_eq!(classify("Ai hello"), ai("hello"));
    }

    #[test]
    fn test_trigger_requires_word_boundary() {
        // "aid" / "asking" must not fire the trigger
        assert_eq!(classify("aid workers"), search("aid workers"));
        assert_eq!(classify("asking prices"), search("asking prices"));
    }

    // ==================== rule 3: URL shape ====================

    #[test]
    fn test_bare_hostname_is_url() {
        assert_eq!(classify("example.com"), url("example.com"));
    }

    #[test]
    fn test_hostname_with_scheme_and_path() {
        assert_eq!(
            classify("https://docs.rs/regex/latest"),
            url("https://docs.rs/regex/latest")
        );
    }

    #[test]
    fn test_subdomains_and_hyphens() {
        assert_eq!(classify("api.my-site.co.uk"), url("api.my-site.co.uk"));
    }

    #[test]
    fn test_hostname_with_whitespace_is_not_url() {
        // contains a space, so it falls through to the later rules
        assert_eq!(classify("example.com test"), search("example.com test"));
    }

    #[test]
    fn test_short_tld_is_not_url() {
        assert_eq!(classify("file.x"), search("file.x"));
    }

    #[test]
    fn test_url_beats_search_without_whitespace() {
        // deliberate precedence: a domain-like typo still navigates
        assert_eq!(classify("recipies.cooking"), url("recipies.cooking"));
    }

    // ==================== rule 4: questions ====================

    #[test]
    fn test_question_word_first_token() {
        assert_eq!(classify("how do I sort a list"), ai("how do I sort a list"));
        assert_eq!(classify("debug my program"), ai("debug my program"));
    }

    #[test]
    fn test_question_word_case_insensitive() {
        assert_eq!(classify("What time is it"), ai("What time is it"));
    }

    #[test]
    fn test_trailing_question_mark() {
        assert_eq!(classify("is it raining?"), ai("is it raining?"));
    }

    #[test]
    fn test_question_word_inside_sentence_does_not_fire() {
        assert_eq!(classify("learn how to cook"), search("learn how to cook"));
    }

    // ==================== rule 5: fallback ====================

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(classify("buy milk"), search("buy milk"));
    }

    #[test]
    fn test_input_is_trimmed_before_rules() {
        assert_eq!(classify("  buy milk  "), search("buy milk"));
        assert_eq!(classify("  example.com  "), url("example.com"));
    }

    // ==================== purity ====================

    #[test]
    fn test_classification_is_idempotent() {
        let inputs = ["ask weather", "example.com", "how now", "buy milk", ""];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }
}
