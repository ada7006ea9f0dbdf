//! Starter taxonomy derived from a corpus of saved links

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::model::{ContentItem, TagCategory};

/// Category colors, assigned by category index
pub const PALETTE: [&str; 10] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1",
];

pub const CONTENT_TYPE_TAGS: [&str; 5] = ["Article", "Tutorial", "Video", "Tool", "Resource"];
pub const LEVEL_TAGS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

const TOP_KEYWORDS: usize = 20;
const TOPIC_TAGS: usize = 8;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid separator regex"));

/// Builds the three starter categories for a collection
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxonomySuggester;

impl TaxonomySuggester {
    pub fn new() -> Self {
        Self
    }

    /// Tokens longer than three characters, most frequent first (stable on ties)
    pub fn corpus_keywords(&self, items: &[ContentItem]) -> Vec<String> {
        let text = items
            .iter()
            .map(|item| format!("{} {}", item.title, item.description))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in NON_WORD.split(&text).filter(|t| t.chars().count() > 3) {
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(TOP_KEYWORDS)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    /// Always returns "Topics", "Content Type" and "Level", in that order.
    ///
    /// Only "Topics" depends on the corpus; an empty corpus leaves it empty.
    pub fn suggest(&self, items: &[ContentItem]) -> Vec<TagCategory> {
        let topics: Vec<String> = self
            .corpus_keywords(items)
            .into_iter()
            .take(TOPIC_TAGS)
            .collect();

        tracing::debug!(
            items = items.len(),
            topics = topics.len(),
            "Suggested starter taxonomy"
        );

        let categories = [
            ("topics", "Topics", topics),
            ("content_type", "Content Type", to_owned(&CONTENT_TYPE_TAGS)),
            ("level", "Level", to_owned(&LEVEL_TAGS)),
        ];

        categories
            .into_iter()
            .enumerate()
            .map(|(i, (id, name, tags))| {
                TagCategory::new(id, name, PALETTE[i % PALETTE.len()], tags)
            })
            .collect()
    }
}

fn to_owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_shape() {
        let categories = TaxonomySuggester::new().suggest(&[]);

        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Topics", "Content Type", "Level"]);
        assert!(categories[0].tags.is_empty());
        assert_eq!(
            categories[1].tags,
            vec!["Article", "Tutorial", "Video", "Tool", "Resource"]
        );
        assert_eq!(categories[2].tags, vec!["Beginner", "Intermediate", "Advanced"]);
        assert_eq!(categories[0].color, PALETTE[0]);
        assert_eq!(categories[2].color, PALETTE[2]);
    }

    #[test]
    fn test_topics_ranked_by_frequency() {
        let items = vec![
            ContentItem::new("Rust async runtime", "tokio internals explained"),
            ContentItem::new("Async Rust patterns", "pinning and futures"),
            ContentItem::new("Rust error handling", ""),
        ];

        let categories = TaxonomySuggester::new().suggest(&items);
        let topics = &categories[0].tags;
        assert_eq!(topics[0], "rust");
        assert_eq!(topics[1], "async");
        assert_eq!(topics.len(), 8);
        assert!(topics.iter().all(|t| t.chars().count() > 3));
    }

    #[test]
    fn test_keywords_capped_and_fixed_categories_unchanged() {
        let items: Vec<ContentItem> = (0..30)
            .map(|i| ContentItem::new(format!("topic{i:02}"), "shared words here"))
            .collect();

        let suggester = TaxonomySuggester::new();
        assert_eq!(suggester.corpus_keywords(&items).len(), 20);

        let categories = suggester.suggest(&items);
        assert_eq!(categories[0].tags[0], "shared");
        assert_eq!(categories[0].tags[1], "words");
        assert_eq!(categories[0].tags[2], "here");
        assert_eq!(categories[1].tags.len(), CONTENT_TYPE_TAGS.len());
        assert_eq!(categories[2].tags.len(), LEVEL_TAGS.len());
    }
}
