// Semantic comparator: embed both strings, compare by cosine.
//
// The two provider calls are independent, so they are issued concurrently
// and both must succeed. Cosine similarity can in principle be negative;
// the result is clamped to [0, 1] so it shares the lexical score range.

use anyhow::Result;
use tracing::debug;

use super::openai::OpenAiEmbedder;
use super::traits::EmbeddingProvider;
use crate::config::Config;
use crate::error::SimilarityError;

/// Computes the "Semantic" score for a pair of strings.
pub struct SemanticComparator {
    provider: Box<dyn EmbeddingProvider>,
    model: String,
}

impl SemanticComparator {
    pub fn new(provider: Box<dyn EmbeddingProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Build a comparator backed by the OpenAI embeddings API.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = OpenAiEmbedder::from_config(config)?;
        Ok(Self::new(Box::new(provider), config.embedding_model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Embed both strings and return their clamped cosine similarity.
    ///
    /// Issues exactly two provider requests, even when `s1 == s2`.
    pub async fn compare(&self, s1: &str, s2: &str) -> crate::error::Result<f64> {
        let (embedding1, embedding2) = futures::try_join!(
            self.provider.fetch_embedding(s1, &self.model),
            self.provider.fetch_embedding(s2, &self.model),
        )
        .map_err(SimilarityError::provider)?;

        let score =
            cosine_similarity(&embedding1, &embedding2).map_err(SimilarityError::provider)?;
        debug!(model = %self.model, score = score, "Computed semantic score");
        Ok(score)
    }
}

/// Cosine similarity (`1 - cosine distance`) clamped to [0, 1].
///
/// Vectors that cannot be compared (empty, different lengths, zero
/// magnitude) are treated as a malformed provider response.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        anyhow::bail!("embedding vector is empty");
    }
    if a.len() != b.len() {
        anyhow::bail!("embedding dimensions differ: {} vs {}", a.len(), b.len());
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if !denom.is_finite() || denom < f64::EPSILON {
        anyhow::bail!("embedding vector has zero or non-finite magnitude");
    }

    let raw = dot / denom;
    if !(0.0..=1.0).contains(&raw) {
        debug!(raw = raw, "Clamping cosine similarity into [0, 1]");
    }
    Ok(raw.clamp(0.0, 1.0))
}
