// OpenAI embeddings API implementation.
//
// One POST to /embeddings per string. The API key is handed in at
// construction time; nothing here reads the environment. There is no retry
// and no rate limiting: a failed call fails the semantic score for that
// comparison and the caller reports it.
//
// API docs: https://platform.openai.com/docs/api-reference/embeddings

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{Embedding, EmbeddingProvider};
use crate::config::Config;
use crate::output::truncate_chars;

/// OpenAI embeddings client.
pub struct OpenAiEmbedder {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiEmbedder {
    /// Create a client for the embeddings API at `base_url`
    /// (e.g. `https://api.openai.com/v1`).
    pub fn new(api_key: String, base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("semantik/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from loaded configuration. Fails if no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.require_openai()?;
        Self::new(
            config.openai_api_key.clone(),
            &config.openai_api_url,
            config.request_timeout,
        )
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn fetch_embedding(&self, text: &str, model: &str) -> Result<Embedding> {
        let url = format!("{}/embeddings", self.base_url);
        let request = EmbeddingRequest { input: text, model };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call OpenAI embeddings API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = api_error_message(&body).unwrap_or(body);
            anyhow::bail!("OpenAI embeddings API returned {}: {}", status, detail);
        }

        let result: EmbeddingResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI embeddings response")?;

        let embedding = result.into_embedding()?;

        debug!(
            model = model,
            dim = embedding.len(),
            text_preview = %truncate_chars(text, 50),
            "Fetched embedding"
        );

        Ok(embedding)
    }
}

/// Pull the human-readable message out of an OpenAI error body, if it has one.
pub fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.message)
        .filter(|message| !message.is_empty())
}

// --- OpenAI API request/response types ---

#[derive(Debug, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub input: &'a str,
    pub model: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingData {
    pub embedding: Vec<f64>,
    #[serde(default)]
    pub index: usize,
}

impl EmbeddingResponse {
    /// The embedding for the single input we sent (index 0).
    pub fn into_embedding(self) -> Result<Embedding> {
        let data = self
            .data
            .into_iter()
            .min_by_key(|d| d.index)
            .context("OpenAI embeddings response contained no embeddings")?;

        if data.embedding.is_empty() {
            anyhow::bail!("OpenAI embeddings response contained an empty vector");
        }
        Ok(data.embedding)
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}
