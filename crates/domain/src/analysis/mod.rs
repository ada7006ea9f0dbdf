//! Heuristic tag suggestion
//!
//! - `keywords`: frequency-ranked tokens
//! - `concepts`: coarse concept detection
//! - `dictionaries`: related-term and context-phrase tables
//! - `fuzzy`: loose word matching
//! - `analyzer`: the per-tag matching cascade
//! - `taxonomy`: starter taxonomy from a corpus

pub mod analyzer;
pub mod concepts;
pub mod dictionaries;
pub mod fuzzy;
pub mod keywords;
pub mod taxonomy;

pub use analyzer::{AnalysisContext, ContentAnalyzer};
pub use concepts::ConceptMatcher;
pub use dictionaries::{ContextTermsTable, RelatedTermsTable};
pub use keywords::KeywordExtractor;
pub use taxonomy::TaxonomySuggester;
