//! In-memory similarity index over the loaded corpus.
//!
//! Built once per corpus; read-only afterwards. A corpus change means a
//! full rebuild — there is no insertion or removal path. Search is a flat
//! O(n·d) scan, which is the right tool at this corpus scale; callers only
//! see the `search` contract and could swap a smarter structure behind it.

use anyhow::Result;
use std::str::FromStr;

use campusbrain_core::error::Error;
use campusbrain_core::traits::Embedder;
use campusbrain_core::types::Document;

/// Similarity metric applied between the query vector and stored vectors.
/// Stored vectors are L2-normalized by every provider, so `Dot` ranks
/// identically to `Cosine`; both are kept because the metric is
/// configuration, not a hardcoded choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cosine,
    Dot,
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name.to_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "dot" => Ok(Self::Dot),
            other => Err(Error::InvalidConfig(format!("unknown similarity metric '{other}'"))),
        }
    }
}

/// Best match position and its similarity score.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub index: usize,
    pub score: f32,
}

/// Owns the corpus and the parallel embedding rows.
/// Invariant: `embeddings.len() == documents.len()` and `embeddings[i]`
/// belongs to `documents[i]`.
pub struct CorpusIndex {
    documents: Vec<Document>,
    embeddings: Vec<Vec<f32>>,
    metric: Metric,
    embedder_id: String,
    dim: usize,
}

impl CorpusIndex {
    /// Embed every document and build the index. The recorded embedder id
    /// and dimension tie the index to the model that produced it; a model
    /// swap requires building a fresh index.
    pub fn build(documents: Vec<Document>, embedder: &dyn Embedder, metric: Metric) -> Result<Self> {
        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = embedder.embed_batch(&texts)?;
        assert_eq!(embeddings.len(), documents.len());
        for e in &embeddings {
            assert_eq!(e.len(), embedder.dim());
        }
        Ok(Self {
            documents,
            embeddings,
            metric,
            embedder_id: embedder.id().to_string(),
            dim: embedder.dim(),
        })
    }

    /// Score the query vector against every stored vector and return the
    /// best position, or `None` for an empty corpus. Only a strictly higher
    /// score displaces the incumbent, so ties resolve to the lowest index.
    pub fn search(&self, query_vec: &[f32]) -> Option<Hit> {
        let mut best: Option<Hit> = None;
        for (index, stored) in self.embeddings.iter().enumerate() {
            let score = match self.metric {
                Metric::Cosine => cosine_similarity(query_vec, stored),
                Metric::Dot => dot(query_vec, stored),
            };
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Hit { index, score });
            }
        }
        best
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn embedder_id(&self) -> &str {
        &self.embedder_id
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product = dot(a, b);
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::cosine_similarity;

    #[test]
    fn cosine_handles_plain_and_degenerate_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
        // Zero vector compares as dissimilar rather than NaN
        assert_eq!(cosine_similarity(&a, &[0.0, 0.0]), 0.0);
    }
}
