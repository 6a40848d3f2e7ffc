// Edit-distance family: Levenshtein, Jaro, Jaro-Winkler.
//
// The raw algorithms come from strsim, which works on Unicode scalar values
// rather than bytes. Jaro and Jaro-Winkler are already bounded to [0, 1];
// Levenshtein is a distance and gets normalized against the longer string.

/// Levenshtein distance normalized to a similarity:
///
///   1 - distance / max(len(s1), len(s2))
///
/// Two empty strings are identical (1.0) rather than a division by zero.
pub fn normalized_levenshtein(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - strsim::levenshtein(s1, s2) as f64 / max_len as f64
}

/// Jaro similarity. Empty vs empty is 1.0, empty vs non-empty is 0.0.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    strsim::jaro(s1, s2)
}

/// Jaro-Winkler similarity: Jaro plus a bonus for a shared prefix of up to
/// four characters (scale 0.1), applied once Jaro exceeds 0.7.
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    strsim::jaro_winkler(s1, s2)
}
