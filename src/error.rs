// Error taxonomy for a single comparison.
//
// Lexical faults are global to the request: a broken metric means every
// score is suspect, so `compare` fails outright. Provider errors are local
// to the semantic entry and get folded into the ScoreSet instead.

use thiserror::Error;

use crate::metrics::Method;

#[derive(Error, Debug)]
pub enum SimilarityError {
    /// A lexical algorithm produced a value outside [0, 1] (or NaN).
    #[error("{method} produced an invalid score: {score}")]
    LexicalFault { method: Method, score: f64 },

    /// The embedding provider failed (network, auth, rate limit, bad payload).
    #[error("failed to compute semantic similarity: {0}")]
    ExternalProvider(String),
}

impl SimilarityError {
    /// Wrap any provider-side failure, keeping the full context chain.
    pub fn provider(err: anyhow::Error) -> Self {
        SimilarityError::ExternalProvider(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
