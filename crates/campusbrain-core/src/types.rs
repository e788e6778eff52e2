//! Domain types shared by the loader, index and retrieval service.

use serde::{Deserialize, Serialize};

pub type DocId = String;

/// One reference document loaded from the corpus directory.
///
/// - `id`: stable identity (file stem)
/// - `display_name`: human-readable label (stem, separators to spaces,
///   title-cased)
/// - `content`: full text body, immutable once loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub display_name: String,
    pub content: String,
}

/// The single best match for a query, enriched with a next-topic suggestion.
///
/// `preview` is bounded by the configured character budget. `score` is the
/// similarity of the match; higher is always better. `recommendation` is
/// always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub preview: String,
    pub source: String,
    pub score: f32,
    pub recommendation: String,
}

/// Outcome of a retrieval call. Empty corpus and blank query are normal
/// outcomes a caller renders as a friendly empty state, not failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SearchOutcome {
    Match(SearchResult),
    EmptyQuery,
    EmptyCorpus,
}

impl SearchOutcome {
    pub fn as_match(&self) -> Option<&SearchResult> {
        match self {
            Self::Match(result) => Some(result),
            _ => None,
        }
    }
}
