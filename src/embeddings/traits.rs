// Embedding provider trait — the swap-ready abstraction.
//
// Anything that can turn a string into a vector for a given model can back
// the semantic score. Implementations must be async because real providers
// are remote HTTP APIs.

use anyhow::Result;
use async_trait::async_trait;

/// A vector embedding for one input string. Used once, never retained.
pub type Embedding = Vec<f64>;

/// Trait for fetching text embeddings from an external provider.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text with the given model.
    ///
    /// Network, auth, rate-limit and malformed-payload failures all surface
    /// as errors; callers decide how far they propagate.
    async fn fetch_embedding(&self, text: &str, model: &str) -> Result<Embedding>;
}
