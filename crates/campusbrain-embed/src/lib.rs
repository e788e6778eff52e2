//! Sentence-embedding provider.
//!
//! Wraps a local all-MiniLM-L6-v2 (BERT) model via candle. The model is
//! loaded once per process; the loaded encoder is immutable and shareable
//! across concurrent queries. `APP_USE_FAKE_EMBEDDINGS=1` switches to a
//! deterministic hashing embedder for fast tests and development.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use candle_core::Device;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use tokenizers::Tokenizer;

use campusbrain_core::error::Error;
use campusbrain_core::traits::Embedder;

pub mod device;
pub mod pool;
pub mod tokenize;

pub use pool::masked_mean_l2;

/// Embedding dimensionality of all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;
/// Token budget per input; longer inputs are truncated.
pub const MAX_LEN: usize = 256;
/// The fixed model this provider wraps. Swapping models changes the vector
/// dimensionality and requires rebuilding any corpus index.
pub const MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Candle-backed sentence encoder: tokenize, forward, mean-pool, normalize.
pub struct SentenceEncoder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    id: String,
}

impl SentenceEncoder {
    /// Load tokenizer, config and weights from the resolved model directory.
    /// Any failure here is startup-fatal (`Error::EmbeddingUnavailable`).
    pub fn load() -> Result<Self, Error> {
        let model_dir =
            resolve_model_dir().map_err(|e| Error::EmbeddingUnavailable(e.to_string()))?;
        Self::load_from(&model_dir).map_err(|e| Error::EmbeddingUnavailable(e.to_string()))
    }

    fn load_from(model_dir: &Path) -> Result<Self> {
        let device = device::select_device();
        println!("🔄 Loading {} from {}...", MODEL_ID, model_dir.display());

        let tokenizer_path = model_dir.join("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            anyhow!("Failed to load tokenizer from {}: {}", tokenizer_path.display(), e)
        })?;

        let config_path = model_dir.join("config.json");
        let config: BertConfig = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

        let weights_path = model_dir.join("model.safetensors");
        if !weights_path.exists() {
            return Err(anyhow!("Model weights not found at {}", weights_path.display()));
        }
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, &device)? };
        let model = BertModel::load(vb, &config)?;
        println!("✅ Sentence encoder loaded");

        Ok(Self {
            model,
            tokenizer,
            device,
            id: format!("local:minilm:d{EMBEDDING_DIM}"),
        })
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let (input_ids, attention_mask) =
            tokenize::tokenize_on_device(&self.tokenizer, text, MAX_LEN, &self.device)?;
        let token_type_ids = input_ids.zeros_like()?;
        let hidden = self.model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let pooled = masked_mean_l2(&hidden, &attention_mask)?;
        let row = pooled.squeeze(0)?.to_vec1::<f32>()?;
        assert_eq!(row.len(), EMBEDDING_DIM);
        Ok(row)
    }
}

impl Embedder for SentenceEncoder {
    fn id(&self) -> &str {
        &self.id
    }
    fn dim(&self) -> usize {
        EMBEDDING_DIM
    }
    fn max_len(&self) -> usize {
        MAX_LEN
    }
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }
}

/// Hashed bag-of-words stand-in with the same shape contract as the real
/// encoder: 384 dims, L2-normalized, deterministic. Empty text yields the
/// zero vector.
struct FakeEmbedder {
    dim: usize,
    id: String,
}

impl FakeEmbedder {
    fn new(dim: usize) -> Self {
        Self { dim, id: format!("fake:xxhash:d{dim}") }
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        use std::hash::{Hash, Hasher};
        use twox_hash::XxHash64;

        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = (v.iter().map(|x| x * x).sum::<f32>()).sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        v
    }
}

impl Embedder for FakeEmbedder {
    fn id(&self) -> &str {
        &self.id
    }
    fn dim(&self) -> usize {
        self.dim
    }
    fn max_len(&self) -> usize {
        MAX_LEN
    }
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }
}

/// The process-wide embedding provider. Construct once at startup and inject
/// wherever embeddings are needed.
pub fn default_embedder() -> Result<Box<dyn Embedder>, Error> {
    let use_fake = std::env::var("APP_USE_FAKE_EMBEDDINGS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if use_fake {
        println!("🧪 Using FakeEmbedder");
        return Ok(Box::new(FakeEmbedder::new(EMBEDDING_DIM)));
    }
    Ok(Box::new(SentenceEncoder::load()?))
}

fn resolve_model_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("APP_MODEL_DIR") {
        let p = PathBuf::from(&dir);
        if p.exists() {
            println!("📦 Using APP_MODEL_DIR: {}", p.display());
            return Ok(p);
        }
    }
    if let Ok(dir) = std::env::var("MODEL_DIR") {
        let p = PathBuf::from(&dir);
        if p.exists() {
            println!("📦 Using MODEL_DIR: {}", p.display());
            return Ok(p);
        }
    }
    for candidate in ["models/all-MiniLM-L6-v2", "../models/all-MiniLM-L6-v2"] {
        let p = Path::new(candidate);
        if p.exists() {
            println!("📦 Using model dir: {}", p.display());
            return Ok(p.to_path_buf());
        }
    }
    Err(anyhow!("Could not locate the all-MiniLM-L6-v2 model directory"))
}
