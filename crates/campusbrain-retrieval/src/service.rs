//! Retrieval service: the public surface the UI and chat layers consume.

use anyhow::Result;

use campusbrain_core::recommend::recommend;
use campusbrain_core::traits::Embedder;
use campusbrain_core::types::{Document, SearchOutcome, SearchResult};

use crate::index::CorpusIndex;

const TRUNCATION_MARKER: &str = "...";

/// One query, one answer. Owns the process-wide embedder and an immutable
/// index snapshot; concurrent read-only queries can share it freely.
pub struct RetrievalService {
    embedder: Box<dyn Embedder>,
    index: CorpusIndex,
    preview_chars: usize,
}

impl RetrievalService {
    /// The index must carry vectors produced by this exact embedder; a
    /// mismatch (stale index after a model swap) is a programmer error.
    pub fn new(embedder: Box<dyn Embedder>, index: CorpusIndex, preview_chars: usize) -> Self {
        assert_eq!(
            embedder.id(),
            index.embedder_id(),
            "index was built with a different embedder"
        );
        assert_eq!(
            embedder.dim(),
            index.dim(),
            "index dimensionality does not match the embedder"
        );
        Self { embedder, index, preview_chars }
    }

    /// Answer a raw query. Blank input and an empty corpus are normal
    /// outcomes; a blank query never reaches the embedding model.
    pub fn answer(&self, query: &str) -> Result<SearchOutcome> {
        if query.trim().is_empty() {
            return Ok(SearchOutcome::EmptyQuery);
        }
        if self.index.is_empty() {
            return Ok(SearchOutcome::EmptyCorpus);
        }

        let query_vec = self.embedder.embed_one(query)?;
        let Some(hit) = self.index.search(&query_vec) else {
            return Ok(SearchOutcome::EmptyCorpus);
        };

        let doc = &self.index.documents()[hit.index];
        Ok(SearchOutcome::Match(SearchResult {
            preview: preview_of(&doc.content, self.preview_chars),
            source: doc.display_name.clone(),
            score: hit.score,
            recommendation: recommend(&doc.display_name).to_string(),
        }))
    }

    /// Display names of the loaded corpus, in index order.
    pub fn list_documents(&self) -> Vec<String> {
        self.index
            .documents()
            .iter()
            .map(|d| d.display_name.clone())
            .collect()
    }

    /// Replace the corpus. The new index is built fully before the swap, so
    /// every query observes exactly one consistent snapshot.
    pub fn rebuild(&mut self, documents: Vec<Document>) -> Result<()> {
        let next = CorpusIndex::build(documents, self.embedder.as_ref(), self.index.metric())?;
        self.index = next;
        Ok(())
    }
}

/// First `budget` characters (char-boundary safe), marker appended only when
/// content was actually truncated.
fn preview_of(content: &str, budget: usize) -> String {
    let mut preview: String = content.chars().take(budget).collect();
    if content.chars().nth(budget).is_some() {
        preview.push_str(TRUNCATION_MARKER);
    }
    preview
}
