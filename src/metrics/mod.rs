// Lexical similarity metrics — the fixed, ordered method set.
//
// Every comparison reports the same seven methods in the same order. The six
// lexical ones are pure functions of the two strings and live in a table keyed
// by Method, so each can be tested on its own and the suite just walks the
// table. The seventh (Semantic) needs an embedding provider and is handled by
// the embeddings module.

pub mod edit;
pub mod ngram;
pub mod sequence;

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, SimilarityError};

/// A similarity method. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Levenshtein,
    Jaro,
    JaroWinkler,
    RatcliffObershelp,
    Jaccard,
    SorensenDice,
    Semantic,
}

/// Signature shared by every lexical metric: two strings in, a score in [0, 1] out.
pub type LexicalFn = fn(&str, &str) -> f64;

/// The lexical half of the method set, in evaluation order.
pub const LEXICAL_METRICS: [(Method, LexicalFn); 6] = [
    (Method::Levenshtein, edit::normalized_levenshtein),
    (Method::Jaro, edit::jaro),
    (Method::JaroWinkler, edit::jaro_winkler),
    (Method::RatcliffObershelp, sequence::ratcliff_obershelp),
    (Method::Jaccard, ngram::jaccard),
    (Method::SorensenDice, ngram::sorensen_dice),
];

impl Method {
    /// All methods in display order.
    pub const ALL: [Method; 7] = [
        Method::Levenshtein,
        Method::Jaro,
        Method::JaroWinkler,
        Method::RatcliffObershelp,
        Method::Jaccard,
        Method::SorensenDice,
        Method::Semantic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Method::Levenshtein => "Levenshtein",
            Method::Jaro => "Jaro",
            Method::JaroWinkler => "Jaro-Winkler",
            Method::RatcliffObershelp => "Ratcliff/Obershelp",
            Method::Jaccard => "Jaccard",
            Method::SorensenDice => "Sorensen-Dice",
            Method::Semantic => "Semantic",
        }
    }

    /// One-line explanation shown alongside the scores.
    pub fn description(&self) -> &'static str {
        match self {
            Method::Levenshtein => "Based on the minimum number of single-character edits needed",
            Method::Jaro => "Accounts for character matchings and transpositions",
            Method::JaroWinkler => {
                "Modified Jaro that gives higher scores to strings matching from the beginning"
            }
            Method::RatcliffObershelp => "Based on the number of matching characters in sequence",
            Method::Jaccard => "Measures similarity based on character n-gram overlap",
            Method::SorensenDice => "Similar to Jaccard but gives more weight to matches",
            Method::Semantic => "Uses text embeddings to measure meaning similarity",
        }
    }

    pub fn is_lexical(&self) -> bool {
        !matches!(self, Method::Semantic)
    }

    /// The pure scoring function for a lexical method, `None` for Semantic.
    pub fn lexical_fn(&self) -> Option<LexicalFn> {
        LEXICAL_METRICS
            .iter()
            .find(|(method, _)| method == self)
            .map(|(_, score_fn)| *score_fn)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Runs every lexical metric over a pair of strings.
///
/// Deterministic and free of I/O. A score outside [0, 1] means a metric is
/// broken, so the whole run fails rather than reporting a wrong number.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricSuite;

impl MetricSuite {
    pub fn run(&self, s1: &str, s2: &str) -> Result<Vec<(Method, f64)>> {
        LEXICAL_METRICS
            .iter()
            .map(|&(method, score_fn)| check_score(method, score_fn(s1, s2)))
            .collect()
    }
}

fn check_score(method: Method, score: f64) -> Result<(Method, f64)> {
    if !(0.0..=1.0).contains(&score) {
        return Err(SimilarityError::LexicalFault { method, score });
    }
    debug!(method = method.label(), score = score, "Computed lexical score");
    Ok((method, score))
}
