// Ratcliff/Obershelp pattern matching ("gestalt" matching).
//
// Find the longest common contiguous block, then repeat on the unmatched
// text to its left and to its right. The ratio is
//
//   2 * matched_chars / (len(s1) + len(s2))
//
// Ties between equally long blocks go to the one starting earliest in the
// first string, then earliest in the second. That rule makes the raw count
// depend on argument order ("tide"/"diet" matches 1 char one way and 2 the
// other), so the pair is put in a canonical order before matching.
//
// Block search only visits (i, j) pairs where a[i] == b[j]: each character
// of the second string is indexed to its positions once, and run lengths
// are carried row to row in sparse scratch buffers.

use std::collections::HashMap;

/// Ratcliff/Obershelp similarity ratio in [0, 1]. Both empty → 1.0.
pub fn ratcliff_obershelp(s1: &str, s2: &str) -> f64 {
    let (first, second) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Total length of all matching blocks found by recursive longest-block search.
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut finder = BlockFinder::new(a, b);
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = finder.longest_common_block(alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest-block search over one pair of sequences, reused across windows.
struct BlockFinder<'a> {
    a: &'a [char],
    /// Positions of each character in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
    /// run[j + 1] = length of the common run ending at the current a[i] and b[j]
    prev_run: Vec<usize>,
    curr_run: Vec<usize>,
    prev_touched: Vec<usize>,
    curr_touched: Vec<usize>,
}

impl<'a> BlockFinder<'a> {
    fn new(a: &'a [char], b: &[char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        Self {
            a,
            b2j,
            prev_run: vec![0; b.len() + 1],
            curr_run: vec![0; b.len() + 1],
            prev_touched: Vec::new(),
            curr_touched: Vec::new(),
        }
    }

    /// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns `(start_in_a, start_in_b, length)`; length 0 when nothing matches.
    fn longest_common_block(
        &mut self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let Self {
            a,
            b2j,
            prev_run,
            curr_run,
            prev_touched,
            curr_touched,
        } = self;

        let mut best = (alo, blo, 0);
        if alo >= ahi || blo >= bhi {
            return best;
        }

        for i in alo..ahi {
            if let Some(positions) = b2j.get(&a[i]) {
                let start = positions.partition_point(|&j| j < blo);
                for &j in &positions[start..] {
                    if j >= bhi {
                        break;
                    }
                    // prev_run[blo] is never written, so runs stop at the window edge
                    let len = prev_run[j] + 1;
                    curr_run[j + 1] = len;
                    curr_touched.push(j + 1);
                    if len > best.2 {
                        best = (i + 1 - len, j + 1 - len, len);
                    }
                }
            }

            for &idx in prev_touched.iter() {
                prev_run[idx] = 0;
            }
            prev_touched.clear();
            std::mem::swap(prev_run, curr_run);
            std::mem::swap(prev_touched, curr_touched);
        }

        for &idx in prev_touched.iter() {
            prev_run[idx] = 0;
        }
        prev_touched.clear();

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn longest_block(a: &str, b: &str) -> (usize, usize, usize) {
        let (a, b) = (chars(a), chars(b));
        BlockFinder::new(&a, &b).longest_common_block(0, a.len(), 0, b.len())
    }

    /// Dense table version of the block search, used as a reference.
    fn dense_matching_characters(a: &[char], b: &[char]) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, a.len(), 0, b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let mut best = (alo, blo, 0);
            let mut prev = vec![0usize; bhi.saturating_sub(blo) + 1];
            for i in alo..ahi {
                let mut curr = vec![0usize; prev.len()];
                for j in blo..bhi {
                    let col = j - blo + 1;
                    if a[i] == b[j] {
                        curr[col] = prev[col - 1] + 1;
                        if curr[col] > best.2 {
                            let len = curr[col];
                            best = (i + 1 - len, j + 1 - len, len);
                        }
                    }
                }
                prev = curr;
            }
            let (i, j, size) = best;
            if size == 0 {
                continue;
            }
            matched += size;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }
        matched
    }

    #[test]
    fn test_identical() {
        assert_eq!(ratcliff_obershelp("hello", "hello"), 1.0);
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(ratcliff_obershelp("", ""), 1.0);
    }

    #[test]
    fn test_one_empty() {
        assert_eq!(ratcliff_obershelp("", "abc"), 0.0);
    }

    #[test]
    fn test_no_common_characters() {
        assert_eq!(ratcliff_obershelp("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_shifted_block() {
        // "bcd" matches: 2 * 3 / 8
        let score = ratcliff_obershelp("abcd", "bcde");
        assert!((score - 0.75).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_recurses_into_right_remainder() {
        // "ab" first, then "cd" to its right: 2 * 4 / 9
        let score = ratcliff_obershelp("abxcd", "abcd");
        assert!((score - 8.0 / 9.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_kitten_sitting() {
        // "itt" then "n": 2 * 4 / 13
        let score = ratcliff_obershelp("kitten", "sitting");
        assert!((score - 8.0 / 13.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(
            ratcliff_obershelp("tide", "diet"),
            ratcliff_obershelp("diet", "tide")
        );
    }

    #[test]
    fn test_longest_block_prefers_earliest() {
        assert_eq!(longest_block("abxab", "ab"), (0, 0, 2));
        assert_eq!(longest_block("ab", "xabab"), (0, 1, 2));
    }

    #[test]
    fn test_longest_block_respects_window() {
        let a = chars("xabcx");
        let b = chars("abc");
        let mut finder = BlockFinder::new(&a, &b);
        // "abc" is cut by the window on b, so only "bc" remains
        assert_eq!(finder.longest_common_block(0, 5, 1, 3), (2, 1, 2));
        // Scratch state from the previous search doesn't leak into the next
        assert_eq!(finder.longest_common_block(0, 5, 0, 3), (1, 0, 3));
    }

    #[test]
    fn test_matching_characters_counts_all_blocks() {
        assert_eq!(matching_characters(&chars("abxcd"), &chars("abcd")), 4);
        assert_eq!(matching_characters(&chars("abc"), &chars("")), 0);
    }

    #[test]
    fn test_matches_dense_table_search() {
        let samples = [
            "",
            "a",
            "aaaa",
            "abab",
            "baba",
            "kitten",
            "sitting",
            "tide",
            "diet",
            "abxcdyab",
            "mississippi",
            "missouri",
            "the cat sat on the mat",
            "the mat sat on the cat",
            "naïve café",
        ];
        for a in samples {
            for b in samples {
                let (a, b) = (chars(a), chars(b));
                assert_eq!(
                    matching_characters(&a, &b),
                    dense_matching_characters(&a, &b),
                    "{a:?} / {b:?}"
                );
            }
        }
    }
}
