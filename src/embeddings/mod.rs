// Semantic similarity — embedding providers and the cosine comparator.
//
// The EmbeddingProvider trait is the only seam that touches the network.
// OpenAiEmbedder implements it over HTTP; tests plug in deterministic stubs.

pub mod comparator;
pub mod openai;
pub mod traits;
