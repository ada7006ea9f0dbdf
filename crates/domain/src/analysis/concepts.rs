//! Coarse concept detection by substring lookup

use std::collections::BTreeSet;

/// Concept name and its characteristic terms
pub const CONCEPTS: &[(&str, &[&str])] = &[
    (
        "development",
        &["code", "programming", "software", "development", "developer"],
    ),
    (
        "ai",
        &["ai", "artificial intelligence", "machine learning", "neural", "llm", "gpt"],
    ),
    (
        "security",
        &["security", "vulnerability", "encryption", "authentication", "privacy"],
    ),
    ("design", &["design", "ui", "ux", "interface", "typography"]),
    ("data", &["data", "analytics", "database", "sql", "visualization"]),
    (
        "business",
        &["business", "startup", "entrepreneur", "revenue", "strategy"],
    ),
    ("career", &["career", "job", "resume", "interview", "hiring"]),
    ("marketing", &["marketing", "seo", "advertising", "brand", "growth"]),
    (
        "productivity",
        &["productivity", "workflow", "automation", "efficiency", "organize"],
    ),
    ("learning", &["learn", "tutorial", "course", "education", "guide"]),
];

/// Technical terms reported verbatim when present
pub const TECHNICAL_TERMS: &[&str] = &[
    "api",
    "docker",
    "kubernetes",
    "react",
    "vue",
    "angular",
    "node",
    "python",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "aws",
    "azure",
    "graphql",
    "rest",
    "git",
    "linux",
    "sql",
    "nosql",
];

/// Scans text for concept terms and technical terms.
///
/// Matching is plain substring containment, so "reactive" counts as "react".
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptMatcher;

impl ConceptMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Returns concept names mixed with the literal terms that were found
    pub fn find(&self, text: &str) -> BTreeSet<String> {
        let text = text.to_lowercase();
        let mut found = BTreeSet::new();

        for (concept, terms) in CONCEPTS {
            let hits: Vec<&str> = terms
                .iter()
                .copied()
                .filter(|term| text.contains(term))
                .collect();
            if hits.is_empty() {
                continue;
            }
            found.insert(concept.to_string());
            found.extend(hits.into_iter().map(str::to_string));
        }

        found.extend(
            TECHNICAL_TERMS
                .iter()
                .filter(|term| text.contains(*term))
                .map(|term| term.to_string()),
        );

        found
    }
}
