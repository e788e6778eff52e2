//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env
//! vars. Path values are expanded (`~` and `${VAR}`) before use.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::PathBuf;

/// Default corpus directory, auto-created and seeded when absent.
pub const DEFAULT_CORPUS_DIR: &str = "knowledge";
/// Default preview budget in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 800;
/// Default model directory for the local sentence encoder.
pub const DEFAULT_MODEL_DIR: &str = "models/all-MiniLM-L6-v2";

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Corpus directory, `~`/`${VAR}` expanded.
    pub fn corpus_dir(&self) -> PathBuf {
        let dir: String = self
            .get("corpus.dir")
            .unwrap_or_else(|_| DEFAULT_CORPUS_DIR.to_string());
        expand_path(dir)
    }

    /// Preview character budget for answer snippets.
    pub fn preview_chars(&self) -> usize {
        self.get("search.preview_chars")
            .unwrap_or(DEFAULT_PREVIEW_CHARS)
    }

    /// Similarity metric name (`cosine` or `dot`).
    pub fn metric(&self) -> String {
        self.get("search.metric")
            .unwrap_or_else(|_| "cosine".to_string())
    }

    /// Local sentence-encoder model directory, `~`/`${VAR}` expanded.
    pub fn model_dir(&self) -> PathBuf {
        let dir: String = self
            .get("embed.model_dir")
            .unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string());
        expand_path(dir)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
