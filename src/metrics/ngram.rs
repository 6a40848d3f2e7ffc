// Set-overlap metrics over character n-grams: Jaccard and Sorensen-Dice.
//
// Both treat a string as a bag (multiset) of n-grams, so repeated n-grams
// count as many times as they occur:
//
//   jaccard  = sum(min counts) / sum(max counts)
//   sorensen = 2 * sum(min counts) / (|bag1| + |bag2|)
//
// The suite uses single characters (n = 1). Equal inputs score 1.0 before any
// counting, which also covers empty vs empty; exactly one empty input is 0.0.

use std::collections::HashMap;

/// N-gram size used by the metric suite.
pub const DEFAULT_NGRAM_SIZE: usize = 1;

/// A multiset of the character n-grams in a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NGramBag {
    counts: HashMap<String, usize>,
    total: usize,
}

impl NGramBag {
    /// Collect every contiguous run of `n` characters. Strings shorter than
    /// `n` produce an empty bag; `n = 0` is treated as 1.
    pub fn new(text: &str, n: usize) -> Self {
        let n = n.max(1);
        let chars: Vec<char> = text.chars().collect();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for window in chars.windows(n) {
            *counts.entry(window.iter().collect()).or_default() += 1;
        }

        let total = counts.values().sum();
        Self { counts, total }
    }

    /// Number of n-grams, counting repeats.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Size of the multiset intersection (sum of per-gram minimum counts).
    pub fn intersection_size(&self, other: &NGramBag) -> usize {
        self.counts
            .iter()
            .map(|(gram, &count)| count.min(other.count(gram)))
            .sum()
    }

    /// Size of the multiset union (sum of per-gram maximum counts).
    pub fn union_size(&self, other: &NGramBag) -> usize {
        self.total + other.total - self.intersection_size(other)
    }
}

/// Jaccard similarity over character unigrams.
pub fn jaccard(s1: &str, s2: &str) -> f64 {
    jaccard_ngrams(s1, s2, DEFAULT_NGRAM_SIZE)
}

/// Sorensen-Dice similarity over character unigrams.
pub fn sorensen_dice(s1: &str, s2: &str) -> f64 {
    sorensen_dice_ngrams(s1, s2, DEFAULT_NGRAM_SIZE)
}

/// Jaccard similarity over character n-grams of size `n`.
pub fn jaccard_ngrams(s1: &str, s2: &str, n: usize) -> f64 {
    if let Some(score) = quick_answer(s1, s2) {
        return score;
    }
    let a = NGramBag::new(s1, n);
    let b = NGramBag::new(s2, n);

    let union = a.union_size(&b);
    if union == 0 {
        0.0
    } else {
        a.intersection_size(&b) as f64 / union as f64
    }
}

/// Sorensen-Dice similarity over character n-grams of size `n`.
pub fn sorensen_dice_ngrams(s1: &str, s2: &str, n: usize) -> f64 {
    if let Some(score) = quick_answer(s1, s2) {
        return score;
    }
    let a = NGramBag::new(s1, n);
    let b = NGramBag::new(s2, n);

    let total = a.len() + b.len();
    if total == 0 {
        0.0
    } else {
        2.0 * a.intersection_size(&b) as f64 / total as f64
    }
}

fn quick_answer(s1: &str, s2: &str) -> Option<f64> {
    if s1 == s2 {
        Some(1.0)
    } else if s1.is_empty() || s2.is_empty() {
        Some(0.0)
    } else {
        None
    }
}
