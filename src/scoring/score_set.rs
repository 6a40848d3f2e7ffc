use super::band::SimilarityBand;
use crate::metrics::Method;

/// Result of one method: a score, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Score(f64),
    Unavailable { reason: String },
}

/// One row of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub method: Method,
    pub outcome: ScoreOutcome,
}

impl ScoreEntry {
    pub fn score(&self) -> Option<f64> {
        match self.outcome {
            ScoreOutcome::Score(score) => Some(score),
            ScoreOutcome::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.outcome {
            ScoreOutcome::Score(_) => None,
            ScoreOutcome::Unavailable { reason } => Some(reason),
        }
    }

    pub fn band(&self) -> Option<SimilarityBand> {
        self.score().map(SimilarityBand::from_score)
    }
}

/// Ordered mapping from method to outcome, built fresh for each comparison.
///
/// Insertion order is preserved and a method appears at most once;
/// inserting an existing method replaces its outcome in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSet {
    entries: Vec<ScoreEntry>,
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous outcome for `method`, if any.
    pub fn insert(&mut self, method: Method, outcome: ScoreOutcome) -> Option<ScoreOutcome> {
        match self.entries.iter_mut().find(|e| e.method == method) {
            Some(entry) => Some(std::mem::replace(&mut entry.outcome, outcome)),
            None => {
                self.entries.push(ScoreEntry { method, outcome });
                None
            }
        }
    }

    pub fn get(&self, method: Method) -> Option<&ScoreEntry> {
        self.entries.iter().find(|e| e.method == method)
    }

    /// The numeric score for `method`, if present and computed.
    pub fn score(&self, method: Method) -> Option<f64> {
        self.get(method).and_then(ScoreEntry::score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.entries.iter().map(|e| e.method).collect()
    }

    /// Lexical scores in evaluation order.
    pub fn lexical_scores(&self) -> Vec<(Method, f64)> {
        self.entries
            .iter()
            .filter(|e| e.method.is_lexical())
            .filter_map(|e| e.score().map(|s| (e.method, s)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScoreSet {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
