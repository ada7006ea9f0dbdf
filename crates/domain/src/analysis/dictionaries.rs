//! Fixed expansion tables keyed by canonical tag label

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::analysis::fuzzy::FuzzyPhrase;

type Table = HashMap<&'static str, &'static [&'static str]>;
type Patterns = HashMap<&'static str, Vec<FuzzyPhrase>>;

const RELATED_TERMS: &[(&str, &[&str])] = &[
    (
        "Resume Builder",
        &[
            "resume",
            "cv",
            "curriculum vitae",
            "job application",
            "cover letter",
            "portfolio",
        ],
    ),
    (
        "AI",
        &[
            "artificial intelligence",
            "machine learning",
            "ml",
            "llm",
            "gpt",
            "chatgpt",
            "neural network",
            "deep learning",
            "ai",
        ],
    ),
    (
        "Frontend",
        &[
            "react",
            "vue",
            "angular",
            "css",
            "html",
            "javascript",
            "ui",
            "web design",
            "frontend",
        ],
    ),
    (
        "Backend",
        &[
            "server",
            "api",
            "database",
            "node",
            "django",
            "backend",
            "microservices",
        ],
    ),
    (
        "DevOps",
        &[
            "docker",
            "kubernetes",
            "ci/cd",
            "deployment",
            "infrastructure",
            "devops",
            "terraform",
        ],
    ),
    (
        "Security",
        &[
            "security",
            "encryption",
            "vulnerability",
            "authentication",
            "privacy",
            "cybersecurity",
        ],
    ),
    (
        "Mobile",
        &["ios", "android", "mobile", "app", "swift", "kotlin", "flutter"],
    ),
    (
        "Database",
        &["sql", "postgres", "mongodb", "database", "redis", "nosql"],
    ),
    (
        "Testing",
        &["test", "testing", "qa", "unit test", "jest", "cypress"],
    ),
    (
        "Performance",
        &["performance", "optimization", "speed", "caching", "latency"],
    ),
    (
        "Design",
        &["design", "ux", "ui", "figma", "typography", "prototype"],
    ),
    (
        "Analytics",
        &["analytics", "metrics", "data", "dashboard", "tracking"],
    ),
    (
        "Marketing",
        &[
            "marketing",
            "seo",
            "advertising",
            "content marketing",
            "social media",
            "growth",
        ],
    ),
    (
        "Business",
        &["business", "startup", "entrepreneur", "strategy", "revenue"],
    ),
    (
        "Career",
        &["career", "job", "interview", "hiring", "resume", "salary"],
    ),
];

const CONTEXT_TERMS: &[(&str, &[&str])] = &[
    (
        "Resume Builder",
        &[
            "resume template",
            "cv template",
            "build your resume",
            "resume maker",
            "create resume",
        ],
    ),
    (
        "Tutorial",
        &[
            "how to",
            "guide",
            "step by step",
            "learn",
            "walkthrough",
            "tutorial",
            "beginner",
        ],
    ),
    (
        "Documentation",
        &["docs", "documentation", "reference", "manual", "api reference"],
    ),
    (
        "Tool",
        &["tool", "app", "utility", "generator", "online", "free"],
    ),
    (
        "Library",
        &["library", "package", "npm", "crate", "framework", "sdk"],
    ),
    (
        "API",
        &["api", "endpoint", "rest", "graphql", "webhook"],
    ),
    (
        "Resource",
        &["resource", "collection", "list", "awesome", "curated"],
    ),
    (
        "Article",
        &["article", "blog", "post", "read", "opinion"],
    ),
    (
        "Video",
        &["video", "watch", "youtube", "stream", "episode"],
    ),
    (
        "Podcast",
        &["podcast", "episode", "listen", "audio"],
    ),
    (
        "Book",
        &["book", "ebook", "read", "chapter", "author"],
    ),
    (
        "Course",
        &["course", "lesson", "class", "curriculum", "enroll"],
    ),
    (
        "Community",
        &["community", "forum", "discord", "slack", "group"],
    ),
    (
        "Event",
        &["event", "conference", "meetup", "webinar", "summit"],
    ),
    (
        "Project",
        &[
            "project",
            "github",
            "open source",
            "repository",
            "side project",
        ],
    ),
    (
        "Research",
        &["research", "paper", "study", "arxiv", "findings"],
    ),
];

static RELATED_INDEX: Lazy<Table> = Lazy::new(|| RELATED_TERMS.iter().copied().collect());

static CONTEXT_INDEX: Lazy<Table> = Lazy::new(|| CONTEXT_TERMS.iter().copied().collect());

static RELATED_PATTERNS: Lazy<Patterns> = Lazy::new(|| compile(RELATED_TERMS));

static CONTEXT_PATTERNS: Lazy<Patterns> = Lazy::new(|| compile(CONTEXT_TERMS));

fn compile(table: &'static [(&'static str, &'static [&'static str])]) -> Patterns {
    table
        .iter()
        .map(|&(tag, terms)| {
            let phrases: Vec<_> = terms
                .iter()
                .filter_map(|term| FuzzyPhrase::new(term))
                .collect();
            (tag, phrases)
        })
        .collect()
}

/// Synonyms and related words for specific tag labels
#[derive(Debug, Clone, Copy, Default)]
pub struct RelatedTermsTable;

impl RelatedTermsTable {
    /// Related terms for `tag`, empty when the label is not listed
    pub fn lookup(tag: &str) -> &'static [&'static str] {
        RELATED_INDEX.get(tag).copied().unwrap_or(&[])
    }

    /// Compiled form of [`Self::lookup`], built on first use
    pub fn patterns(tag: &str) -> &'static [FuzzyPhrase] {
        RELATED_PATTERNS.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Context-indicating phrases for generic content-type labels
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextTermsTable;

impl ContextTermsTable {
    /// Context phrases for `tag`, empty when the label is not listed
    pub fn lookup(tag: &str) -> &'static [&'static str] {
        CONTEXT_INDEX.get(tag).copied().unwrap_or(&[])
    }

    /// Compiled form of [`Self::lookup`], built on first use
    pub fn patterns(tag: &str) -> &'static [FuzzyPhrase] {
        CONTEXT_PATTERNS.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}
