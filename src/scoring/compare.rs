// The `compare` operation: lexical suite, then semantic comparator, merged
// into one ScoreSet in fixed method order.
//
// Failure policy differs by half. A lexical fault fails the whole request,
// since no partial lexical result is meaningful. A provider failure only
// marks the Semantic entry as unavailable; the six lexical scores stand.

use tracing::{debug, warn};

use super::score_set::{ScoreOutcome, ScoreSet};
use crate::config::Config;
use crate::embeddings::comparator::SemanticComparator;
use crate::error::Result;
use crate::metrics::{Method, MetricSuite};

/// Reason attached to the Semantic entry when semantic scoring is switched off.
pub const SEMANTIC_DISABLED: &str = "semantic scoring disabled";

/// Compares two strings across every method.
///
/// Holds no per-request state, so one instance can serve any number of
/// independent (including concurrent) comparisons.
pub struct Comparator {
    suite: MetricSuite,
    semantic: std::result::Result<SemanticComparator, String>,
}

impl Comparator {
    pub fn new(semantic: SemanticComparator) -> Self {
        Self {
            suite: MetricSuite,
            semantic: Ok(semantic),
        }
    }

    /// A comparator that never calls an embedding provider.
    pub fn lexical_only() -> Self {
        Self::without_semantic(SEMANTIC_DISABLED)
    }

    /// A lexical-only comparator whose Semantic entry reports `reason`.
    pub fn without_semantic(reason: impl Into<String>) -> Self {
        Self {
            suite: MetricSuite,
            semantic: Err(reason.into()),
        }
    }

    /// Build from config. If the semantic comparator can't be set up (no API
    /// key, bad client settings), lexical scoring still runs and the setup
    /// error becomes the Semantic entry's reason.
    pub fn from_config(config: &Config) -> Self {
        match SemanticComparator::from_config(config) {
            Ok(semantic) => Self::new(semantic),
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(reason = %reason, "Semantic scoring unavailable, using lexical methods only");
                Self::without_semantic(reason)
            }
        }
    }

    /// Score `s1` against `s2` with every method.
    ///
    /// Empty strings are accepted and follow each metric's own convention.
    pub async fn compare(&self, s1: &str, s2: &str) -> Result<ScoreSet> {
        let mut scores = ScoreSet::new();
        for (method, score) in self.suite.run(s1, s2)? {
            scores.insert(method, ScoreOutcome::Score(score));
        }

        let semantic = match &self.semantic {
            Ok(comparator) => match comparator.compare(s1, s2).await {
                Ok(score) => ScoreOutcome::Score(score),
                Err(e) => {
                    warn!(error = %e, "Semantic score unavailable");
                    ScoreOutcome::Unavailable {
                        reason: e.to_string(),
                    }
                }
            },
            Err(reason) => ScoreOutcome::Unavailable {
                reason: reason.clone(),
            },
        };
        scores.insert(Method::Semantic, semantic);

        debug!(
            methods = scores.len(),
            lexical = scores.lexical_scores().len(),
            semantic = scores.score(Method::Semantic).is_some(),
            "Comparison complete"
        );

        Ok(scores)
    }
}
