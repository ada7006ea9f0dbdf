//! Tag suggestion by an ordered cascade of matching strategies

use std::collections::{BTreeSet, HashSet};

use crate::analysis::{
    concepts::ConceptMatcher,
    dictionaries::{ContextTermsTable, RelatedTermsTable},
    fuzzy::FuzzyPhrase,
    keywords::KeywordExtractor,
};
use crate::model::{ContentItem, MatchStrategy, TagCategory, TagMatch};
use crate::ports::TagSuggester;

/// Everything the strategies look at for one piece of content
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Lower-cased "title description"
    pub content: String,
    /// Output of [`KeywordExtractor::extract`] over `content`
    pub keywords: Vec<String>,
    /// Output of [`ConceptMatcher::find`] over `content`
    pub concepts: BTreeSet<String>,
}

/// One taxonomy label prepared for the cascade.
///
/// Only multi-word labels get a compiled phrase; single words never reach
/// the fuzzy strategy.
#[derive(Debug, Clone)]
pub struct TagPattern<'a> {
    label: &'a str,
    lowered: String,
    phrase: Option<FuzzyPhrase>,
}

impl<'a> TagPattern<'a> {
    pub fn new(label: &'a str) -> Self {
        let phrase = if label.split_whitespace().nth(1).is_some() {
            FuzzyPhrase::new(label)
        } else {
            None
        };

        Self {
            label,
            lowered: label.to_lowercase(),
            phrase,
        }
    }
}

type StrategyFn = fn(&TagPattern<'_>, &AnalysisContext) -> bool;

/// Cheap and precise checks first; the first hit wins for a tag.
const CASCADE: &[(MatchStrategy, StrategyFn)] = &[
    (MatchStrategy::Direct, direct_match),
    (MatchStrategy::Fuzzy, fuzzy_match),
    (MatchStrategy::Keyword, keyword_match),
    (MatchStrategy::Semantic, semantic_match),
    (MatchStrategy::Context, context_match),
];

/// Strategy 1: the tag text occurs verbatim
pub fn direct_match(tag: &TagPattern<'_>, ctx: &AnalysisContext) -> bool {
    ctx.content.contains(&tag.lowered)
}

/// Strategy 2: each word of a multi-word tag matches the content
pub fn fuzzy_match(tag: &TagPattern<'_>, ctx: &AnalysisContext) -> bool {
    tag.phrase
        .as_ref()
        .is_some_and(|phrase| phrase.is_match(&ctx.content))
}

/// Strategy 3: some related term matches a single extracted keyword
pub fn keyword_match(tag: &TagPattern<'_>, ctx: &AnalysisContext) -> bool {
    RelatedTermsTable::patterns(tag.label)
        .iter()
        .any(|phrase| phrase.matches_any(&ctx.keywords))
}

/// Strategy 4: some related term matches a single detected concept
pub fn semantic_match(tag: &TagPattern<'_>, ctx: &AnalysisContext) -> bool {
    RelatedTermsTable::patterns(tag.label)
        .iter()
        .any(|phrase| phrase.matches_any(&ctx.concepts))
}

/// Strategy 5: some context phrase matches the content
pub fn context_match(tag: &TagPattern<'_>, ctx: &AnalysisContext) -> bool {
    ContextTermsTable::patterns(tag.label)
        .iter()
        .any(|phrase| phrase.is_match(&ctx.content))
}

/// Decides which existing tags plausibly apply to a piece of content.
///
/// Stateless: every call builds its own [`AnalysisContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAnalyzer {
    keywords: KeywordExtractor,
    concepts: ConceptMatcher,
}

impl ContentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the shared inputs for the strategies
    pub fn analyze(&self, item: &ContentItem) -> AnalysisContext {
        let content = item.normalized_text();
        let keywords = self.keywords.extract(&content);
        let concepts = self.concepts.find(&content);
        AnalysisContext {
            content,
            keywords,
            concepts,
        }
    }

    /// Run the cascade for one tag, returning the strategy that accepted it
    pub fn match_tag(&self, tag: &str, ctx: &AnalysisContext) -> Option<MatchStrategy> {
        self.match_pattern(&TagPattern::new(tag), ctx)
    }

    fn match_pattern(
        &self,
        tag: &TagPattern<'_>,
        ctx: &AnalysisContext,
    ) -> Option<MatchStrategy> {
        CASCADE
            .iter()
            .find(|(_, strategy)| strategy(tag, ctx))
            .map(|(kind, _)| *kind)
    }

    /// Every (category, tag) pair that matched, in taxonomy order.
    ///
    /// A label listed in two categories is evaluated, and reported, once per
    /// category.
    pub fn explain(&self, item: &ContentItem, categories: &[TagCategory]) -> Vec<TagMatch> {
        let ctx = self.analyze(item);
        let mut matches = Vec::new();

        for category in categories {
            for tag in &category.tags {
                if let Some(strategy) = self.match_pattern(&TagPattern::new(tag), &ctx) {
                    tracing::trace!(
                        tag = %tag,
                        category = %category.id,
                        strategy = %strategy,
                        "Tag matched"
                    );
                    matches.push(TagMatch {
                        tag: tag.clone(),
                        category_id: category.id.clone(),
                        strategy,
                    });
                }
            }
        }

        tracing::debug!(
            categories = categories.len(),
            keywords = ctx.keywords.len(),
            concepts = ctx.concepts.len(),
            matched = matches.len(),
            "Analyzed content"
        );

        matches
    }

    /// Matched tag labels without duplicates, first-seen order
    pub fn suggest_tags(&self, item: &ContentItem, categories: &[TagCategory]) -> Vec<String> {
        let mut seen = HashSet::new();
        self.explain(item, categories)
            .into_iter()
            .filter(|m| seen.insert(m.tag.clone()))
            .map(|m| m.tag)
            .collect()
    }
}

impl TagSuggester for ContentAnalyzer {
    fn suggest_tags(&self, item: &ContentItem, categories: &[TagCategory]) -> Vec<String> {
        ContentAnalyzer::suggest_tags(self, item, categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, tags: &[&str]) -> TagCategory {
        TagCategory::new(
            name.to_lowercase(),
            name,
            "#3B82F6",
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn ctx(title: &str, description: &str) -> AnalysisContext {
        ContentAnalyzer::new().analyze(&ContentItem::new(title, description))
    }

    fn as_set(tags: Vec<String>) -> BTreeSet<String> {
        tags.into_iter().collect()
    }

    #[test]
    fn test_resume_builder_direct_match() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new(
            "Building a Resume with AI",
            "Use this AI-powered resume builder today",
        );
        let categories = vec![category("Career", &["Resume Builder"])];

        let matches = analyzer.explain(&item, &categories);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].tag, "Resume Builder");
        assert_eq!(matches[0].strategy, MatchStrategy::Direct);
    }

    #[test]
    fn test_tutorial_via_context_phrases() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("A guide to cooking pasta", "step by step instructions");
        let categories = vec![category("Format", &["Tutorial"])];

        let matches = analyzer.explain(&item, &categories);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].strategy, MatchStrategy::Context);
    }

    #[test]
    fn test_no_overlap_yields_nothing() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("Sunny picnic by the lake", "");
        let categories = vec![
            category("Topics", &["AI", "Frontend", "Resume Builder"]),
            category("Format", &["Tutorial", "Video"]),
        ];

        assert!(analyzer.suggest_tags(&item, &categories).is_empty());
    }

    #[test]
    fn test_case_insensitive_tags() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("AI tools", "");

        let lower = analyzer.suggest_tags(&item, &[category("Topics", &["ai"])]);
        let upper = analyzer.suggest_tags(&item, &[category("Topics", &["AI"])]);
        assert_eq!(lower, vec!["ai"]);
        assert_eq!(upper, vec!["AI"]);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("Rust video walkthrough", "");
        let categories = vec![
            category("Topics", &["Rust", "Video"]),
            category("Format", &["Video", "Tutorial"]),
        ];

        assert_eq!(analyzer.explain(&item, &categories).len(), 4);
        assert_eq!(
            analyzer.suggest_tags(&item, &categories),
            vec!["Rust", "Video", "Tutorial"]
        );
    }

    #[test]
    fn test_deterministic() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new(
            "Deploying microservices with Docker",
            "A hands-on guide to kubernetes security",
        );
        let categories = vec![category(
            "Topics",
            &["DevOps", "Security", "Backend", "Tutorial", "Design"],
        )];

        let first = as_set(analyzer.suggest_tags(&item, &categories));
        let second = as_set(analyzer.suggest_tags(&item, &categories));
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_tags_always_present() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("Notes on Category Theory", "for programmers");
        let categories = vec![category(
            "Topics",
            &["category theory", "NOTES", "gram", "absent label"],
        )];

        let result = as_set(analyzer.suggest_tags(&item, &categories));
        assert!(result.contains("category theory"));
        assert!(result.contains("NOTES"));
        assert!(result.contains("gram"));
        assert!(!result.contains("absent label"));
    }

    #[test]
    fn test_fuzzy_multi_word_plural() {
        let c = ctx("Tips for designing REST and GraphQL apis", "with good error handling");
        let rest_api = TagPattern::new("REST API");
        assert!(!direct_match(&rest_api, &c));
        assert!(fuzzy_match(&rest_api, &c));
        assert!(!fuzzy_match(&TagPattern::new("REST"), &c));
    }

    #[test]
    fn test_keyword_strategy_uses_related_terms() {
        let c = ctx("Kotlin coroutines explained", "");
        assert!(c.keywords.contains(&"kotlin".to_string()));
        assert!(keyword_match(&TagPattern::new("Mobile"), &c));
        assert!(!keyword_match(&TagPattern::new("Unlisted"), &c));
    }

    #[test]
    fn test_semantic_strategy_uses_concepts() {
        // "vulnerability" is buried mid-token, so only the substring scan sees it
        let c = ctx("Antivulnerabilityscanner notes", "");
        assert!(c.concepts.contains("security"));
        let security = TagPattern::new("Security");
        assert!(!keyword_match(&security, &c));
        assert!(semantic_match(&security, &c));
    }

    #[test]
    fn test_match_tag_reports_first_strategy() {
        let analyzer = ContentAnalyzer::new();
        let c = ctx("Free online generator", "");
        assert_eq!(analyzer.match_tag("Tool", &c), Some(MatchStrategy::Context));
        assert_eq!(analyzer.match_tag("online", &c), Some(MatchStrategy::Direct));
        assert_eq!(analyzer.match_tag("Podcast", &c), None);
    }

    #[test]
    fn test_empty_categories_and_tags() {
        let analyzer = ContentAnalyzer::new();
        let item = ContentItem::new("Anything", "at all");
        assert!(analyzer.suggest_tags(&item, &[]).is_empty());
        assert!(
            analyzer
                .suggest_tags(&item, &[category("Empty", &[])])
                .is_empty()
        );
    }

    #[test]
    fn test_batch_against_every_table_label() {
        let labels = [
            "Resume Builder", "AI", "Frontend", "Backend", "DevOps", "Security", "Mobile",
            "Database", "Testing", "Performance", "Design", "Analytics", "Marketing",
            "Business", "Career", "Tutorial", "Documentation", "Tool", "Library", "API",
            "Resource", "Article", "Video", "Podcast", "Book", "Course", "Community", "Event",
            "Project", "Research",
        ];
        let categories = vec![category("Everything", &labels)];
        let templates = [
            ContentItem::new("A guide to cooking pasta", "step by step instructions"),
            ContentItem::new(
                "Deploying microservices with Docker",
                "A hands-on guide to kubernetes security and caching",
            ),
            ContentItem::new("Free online resume maker", "Build your resume for job interviews"),
            ContentItem::new("Sunny picnic by the lake", ""),
        ];

        let analyzer = ContentAnalyzer::new();
        let expected: Vec<Vec<String>> = templates
            .iter()
            .map(|item| analyzer.suggest_tags(item, &categories))
            .collect();
        assert!(expected[0].contains(&"Tutorial".to_string()));
        assert!(expected[3].is_empty());

        let started = std::time::Instant::now();
        for i in 0..400 {
            let slot = i % templates.len();
            assert_eq!(
                analyzer.suggest_tags(&templates[slot], &categories),
                expected[slot]
            );
        }
        assert!(
            started.elapsed() < std::time::Duration::from_secs(30),
            "batch took {:?}",
            started.elapsed()
        );
    }
}
