// Unit tests for the lexical metric suite.
//
// Tests properties that must hold for every lexical method: identity scores
// 1.0, every score stays in [0, 1], argument order doesn't matter, and the
// empty-string conventions. Plus the known worked examples.

use semantik::metrics::edit::normalized_levenshtein;
use semantik::metrics::{Method, MetricSuite, LEXICAL_METRICS};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "b",
    "ab",
    "ba",
    "hello",
    "hello world",
    "kitten",
    "sitting",
    "martha",
    "marhta",
    "tide",
    "diet",
    "The quick brown fox jumps over the lazy dog",
    "A quick brown dog jumps over the lazy fox",
    "aaaaab",
    "baaaaa",
    "naïve café",
    "naive cafe",
    "🙂🙃 emoji",
];

// ============================================================
// Identity, range, symmetry — across every sample pair
// ============================================================

#[test]
fn identical_strings_score_one_for_every_lexical_method() {
    for s in SAMPLES {
        for (method, score) in MetricSuite.run(s, s).unwrap() {
            assert_eq!(score, 1.0, "{method} on {s:?} vs itself gave {score}");
        }
    }
}

#[test]
fn every_lexical_score_is_in_unit_range() {
    for a in SAMPLES {
        for b in SAMPLES {
            for (method, score_fn) in LEXICAL_METRICS {
                let score = score_fn(a, b);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{method} on {a:?} vs {b:?} gave {score}"
                );
            }
        }
    }
}

#[test]
fn every_lexical_method_is_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            for (method, score_fn) in LEXICAL_METRICS {
                let forward = score_fn(a, b);
                let backward = score_fn(b, a);
                assert!(
                    (forward - backward).abs() < 1e-12,
                    "{method} asymmetric on {a:?} / {b:?}: {forward} vs {backward}"
                );
            }
        }
    }
}

#[test]
fn suite_never_faults_on_sample_pairs() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert!(MetricSuite.run(a, b).is_ok(), "{a:?} / {b:?}");
        }
    }
}

// ============================================================
// Empty-string conventions
// ============================================================

#[test]
fn empty_vs_empty_scores_one_everywhere() {
    for (method, score) in MetricSuite.run("", "").unwrap() {
        assert_eq!(score, 1.0, "{method}");
    }
}

#[test]
fn empty_vs_nonempty_scores_zero_everywhere() {
    for (method, score) in MetricSuite.run("", "abc").unwrap() {
        assert_eq!(score, 0.0, "{method}");
    }
}

// ============================================================
// Worked examples
// ============================================================

#[test]
fn kitten_sitting_levenshtein() {
    let score = normalized_levenshtein("kitten", "sitting");
    assert!((score - 0.571).abs() < 0.001, "Expected ~0.571, got {score}");
}

#[test]
fn hello_hello_edit_and_sequence_methods() {
    let scores = MetricSuite.run("hello", "hello").unwrap();
    for method in [Method::Jaro, Method::JaroWinkler, Method::RatcliffObershelp] {
        let (_, score) = scores.iter().find(|(m, _)| *m == method).unwrap();
        assert_eq!(*score, 1.0, "{method}");
    }
}

#[test]
fn completely_different_strings_score_zero() {
    for (method, score) in MetricSuite.run("abc", "xyz").unwrap() {
        assert_eq!(score, 0.0, "{method}");
    }
}

#[test]
fn jaro_winkler_never_below_jaro() {
    let jaro = Method::Jaro.lexical_fn().unwrap();
    let jaro_winkler = Method::JaroWinkler.lexical_fn().unwrap();
    for a in SAMPLES {
        for b in SAMPLES {
            assert!(jaro_winkler(a, b) >= jaro(a, b), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn sorensen_dice_never_below_jaccard() {
    let jaccard = Method::Jaccard.lexical_fn().unwrap();
    let sorensen = Method::SorensenDice.lexical_fn().unwrap();
    for a in SAMPLES {
        for b in SAMPLES {
            assert!(sorensen(a, b) >= jaccard(a, b) - 1e-12, "{a:?} / {b:?}");
        }
    }
}

// ============================================================
// Long inputs
// ============================================================

#[test]
fn paragraph_length_inputs_score_quickly() {
    let first = "the quick brown fox jumps over the lazy dog ".repeat(100);
    let second = "a quick brown dog jumps over the lazy fox ".repeat(100);

    let start = std::time::Instant::now();
    let forward = MetricSuite.run(&first, &second).unwrap();
    let backward = MetricSuite.run(&second, &first).unwrap();
    let elapsed = start.elapsed();

    for ((method, f), (_, b)) in forward.iter().zip(&backward) {
        assert!((0.0..=1.0).contains(f), "{method} gave {f}");
        assert!((f - b).abs() < 1e-12, "{method} asymmetric: {f} vs {b}");
    }
    // Generous bound so unoptimized builds pass too
    assert!(
        elapsed < std::time::Duration::from_secs(10),
        "two comparisons of ~4k chars took {elapsed:?}"
    );
}

#[test]
fn long_identical_input_matches_fully() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(80);
    let score = Method::RatcliffObershelp.lexical_fn().unwrap()(&text, &text);
    assert_eq!(score, 1.0);
}
