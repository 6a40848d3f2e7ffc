use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Default embedding model, the same one the semantic scores were tuned against.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key. Empty when unset; only needed for semantic scoring.
    pub openai_api_key: String,
    /// Base URL of the embeddings API (defaults to https://api.openai.com/v1)
    pub openai_api_url: String,
    /// Embedding model identifier sent with every request
    pub embedding_model: String,
    /// Per-request HTTP timeout. The core imposes none; the shell may.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the API key, which is checked
    /// separately with `require_openai` so lexical-only runs work without it.
    pub fn load() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout = match lookup("SEMANTIK_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("SEMANTIK_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
                })?;
                if secs == 0 {
                    anyhow::bail!(
                        "SEMANTIK_REQUEST_TIMEOUT_SECS must be greater than zero; unset it for no timeout"
                    );
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_url: lookup("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            embedding_model: lookup("SEMANTIK_EMBEDDING_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            request_timeout,
        })
    }

    /// Check that the OpenAI API key is configured.
    /// Call this before building a semantic comparator.
    pub fn require_openai(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file,\n\
                 or pass --lexical-only to skip semantic scoring."
            );
        }
        Ok(())
    }
}
