//! Frequency-ranked keyword extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Maximum keywords returned by [`KeywordExtractor::extract`]
pub const MAX_KEYWORDS: usize = 20;

/// Tokens this short or shorter are dropped
const MIN_TOKEN_CHARS: usize = 3;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one",
        "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
        "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too",
        "use", "with", "this", "that", "from", "they", "have", "will", "your", "what", "when",
        "been", "were",
    ]
    .into_iter()
    .collect()
});

/// Tokenizes free text and ranks the remaining tokens by frequency
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Whether `word` is in the fixed stop-word set
    pub fn is_stop_word(word: &str) -> bool {
        STOP_WORDS.contains(word)
    }

    /// Extract at most [`MAX_KEYWORDS`] tokens, most frequent first.
    ///
    /// Ties keep the order in which tokens were first seen.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = PUNCTUATION.replace_all(&lowered, " ");

        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() < MIN_TOKEN_CHARS || Self::is_stop_word(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        // sort_by is stable, so first-seen order survives on ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(MAX_KEYWORDS)
            .map(|(token, _)| token.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_stop_word_input() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("the and with this that").is_empty());
    }

    #[test]
    fn test_drops_short_tokens_and_punctuation() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("AI is on, go! Rust-lang; ok?");
        assert_eq!(keywords, vec!["rust", "lang"]);
    }

    #[test]
    fn test_ranked_by_frequency_with_stable_ties() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("alpha beta gamma beta gamma gamma delta");
        assert_eq!(keywords, vec!["gamma", "beta", "alpha", "delta"]);
    }

    #[test]
    fn test_bounded_and_non_increasing() {
        let extractor = KeywordExtractor::new();
        let mut text = String::new();
        for i in 0..40 {
            for _ in 0..(i % 5 + 1) {
                text.push_str(&format!("word{} ", i));
            }
        }
        text.push_str("The THE the for FOR");

        let keywords = extractor.extract(&text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert!(keywords.iter().all(|k| k.chars().count() > 2));
        assert!(keywords.iter().all(|k| !KeywordExtractor::is_stop_word(k)));

        let count = |k: &str| text.split_whitespace().filter(|t| *t == k).count();
        let freqs: Vec<usize> = keywords.iter().map(|k| count(k.as_str())).collect();
        assert!(freqs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_case_insensitive_counting() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Docker docker DOCKER kubernetes");
        assert_eq!(keywords, vec!["docker", "kubernetes"]);
    }
}
