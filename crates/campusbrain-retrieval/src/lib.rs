//! Corpus loading, the in-memory similarity index, and the retrieval
//! service that ties them to the embedding provider.

pub mod index;
pub mod loader;
pub mod service;

pub use index::{CorpusIndex, Hit, Metric};
pub use loader::load_corpus;
pub use service::RetrievalService;
