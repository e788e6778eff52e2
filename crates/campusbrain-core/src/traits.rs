use anyhow::anyhow;

/// A loaded sentence-embedding model. Implementations are immutable after
/// construction and safe to share across concurrent read-only queries.
pub trait Embedder: Send + Sync {
    /// Stable identifier for the provider/model (e.g., `local:minilm:d384`).
    fn id(&self) -> &str;
    /// Embedding dimensionality (D).
    fn dim(&self) -> usize;
    /// Maximum token length for this provider.
    fn max_len(&self) -> usize;
    /// Compute embeddings for a batch of input texts, order-preserving and
    /// 1:1 with the input. Empty text yields a defined vector, not an error.
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;

    /// Convenience wrapper for a single input.
    fn embed_one(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        self.embed_batch(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("embed_batch returned no vector for one input"))
    }
}
