// JSON rendering of a ScoreSet for scripts and other tools.
//
// Computed entries carry `score` and `band`; an unavailable entry carries
// `error` instead. Order matches the ScoreSet.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::metrics::Method;
use crate::scoring::{ScoreSet, SimilarityBand};

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub scores: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<SimilarityBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ScoreSet> for JsonReport {
    fn from(scores: &ScoreSet) -> Self {
        let scores = scores
            .iter()
            .map(|entry| JsonEntry {
                method: entry.method,
                score: entry.score(),
                band: entry.band(),
                error: entry.unavailable_reason().map(str::to_string),
            })
            .collect();
        JsonReport { scores }
    }
}

/// Pretty-printed JSON for a ScoreSet.
pub fn render_json(scores: &ScoreSet) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(scores)).context("Failed to serialize scores")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreOutcome;

    #[test]
    fn test_scored_and_unavailable_entries() {
        let mut scores = ScoreSet::new();
        scores.insert(Method::Jaro, ScoreOutcome::Score(0.9));
        scores.insert(
            Method::Semantic,
            ScoreOutcome::Unavailable {
                reason: "offline".to_string(),
            },
        );

        let value: serde_json::Value = serde_json::from_str(&render_json(&scores).unwrap()).unwrap();
        let entries = value["scores"].as_array().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["method"], "Jaro");
        assert_eq!(entries[0]["score"], 0.9);
        assert_eq!(entries[0]["band"], "very similar");
        assert!(entries[0].get("error").is_none());

        assert_eq!(entries[1]["method"], "Semantic");
        assert_eq!(entries[1]["error"], "offline");
        assert!(entries[1].get("score").is_none());
        assert!(entries[1].get("band").is_none());
    }
}
