//! Loose word matching shared by the matching strategies
//!
//! A word matches a haystack when either alternative of
//! `\b<word>|<word>s?\b` finds a hit, case-insensitively. The two branches are
//! not anchored together: "ai" matches "aim" through the leading boundary and
//! "learn" matches "unlearns" through the trailing one.

use regex::{Regex, RegexBuilder};

/// One compiled word pattern
#[derive(Debug, Clone)]
pub struct FuzzyWord {
    regex: Regex,
}

impl FuzzyWord {
    /// Compile a pattern for `word`. Regex metacharacters in the word are
    /// matched literally.
    pub fn new(word: &str) -> Option<Self> {
        let escaped = regex::escape(word);
        let pattern = format!(r"\b{escaped}|{escaped}s?\b");

        match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(Self { regex }),
            Err(e) => {
                tracing::warn!(word = %word, error = %e, "Skipping unmatchable word");
                None
            }
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

/// A whitespace-split phrase whose every word must match
#[derive(Debug, Clone)]
pub struct FuzzyPhrase {
    words: Vec<FuzzyWord>,
}

impl FuzzyPhrase {
    /// Returns `None` for blank phrases or when a word cannot be compiled
    pub fn new(phrase: &str) -> Option<Self> {
        let words = phrase
            .split_whitespace()
            .map(FuzzyWord::new)
            .collect::<Option<Vec<_>>>()?;

        if words.is_empty() {
            return None;
        }
        Some(Self { words })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Every word matches somewhere in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.words.iter().all(|w| w.is_match(haystack))
    }

    /// Some single candidate satisfies every word
    pub fn matches_any<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .any(|candidate| self.is_match(candidate.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> FuzzyWord {
        FuzzyWord::new(w).unwrap()
    }

    #[test]
    fn test_plain_and_plural() {
        assert!(word("guide").is_match("a guide to pasta"));
        assert!(word("guide").is_match("two guides"));
        assert!(word("GUIDE").is_match("Guide"));
        assert!(!word("guide").is_match("misguidedly"));
    }

    #[test]
    fn test_unanchored_alternation_over_matches() {
        // leading boundary only
        assert!(word("ai").is_match("aim high"));
        // trailing boundary only
        assert!(word("learn").is_match("unlearns"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(word("ci/cd").is_match("our ci/cd pipeline"));
        assert!(word("c++").is_match("modern c++ tips"));
        assert!(!word("c++").is_match("modern c tips"));
    }

    #[test]
    fn test_phrase_requires_every_word() {
        let phrase = FuzzyPhrase::new("step by step").unwrap();
        assert_eq!(phrase.word_count(), 3);
        assert!(phrase.is_match("cooking step by step"));
        assert!(!phrase.is_match("one step ahead"));
        assert!(FuzzyPhrase::new("   ").is_none());
    }

    #[test]
    fn test_matches_any_needs_single_candidate() {
        let phrase = FuzzyPhrase::new("machine learning").unwrap();
        assert!(!phrase.matches_any(["machine", "learning"]));
        assert!(phrase.matches_any(["other", "machine learning"]));
    }
}
