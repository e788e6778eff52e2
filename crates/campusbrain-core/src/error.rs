use thiserror::Error;

/// Startup-fatal failures. Per-query conditions (empty corpus, blank query)
/// are modeled as `SearchOutcome` variants, never as errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Corpus load failed: {0}")]
    CorpusLoad(String),

    #[error("Embedding model unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
