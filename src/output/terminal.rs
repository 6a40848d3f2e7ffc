// Colored terminal output for comparison results.
//
// Each score is coloured by its band, using the same palette as the legend.
// An unavailable semantic score is shown in red with the provider's reason.
// Sections render to strings and the `display_*` functions print them.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use super::{format_score, truncate_chars};
use crate::metrics::Method;
use crate::scoring::{ScoreSet, SimilarityBand};

/// Paint text in a band's colour.
pub fn paint(text: &str, band: SimilarityBand) -> ColoredString {
    let (r, g, b) = band.rgb();
    text.truecolor(r, g, b)
}

/// Render the two inputs being compared.
pub fn render_inputs(s1: &str, s2: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=== Similarity Analysis ===".bold());
    let _ = writeln!(out, "  {} {}", "First: ".dimmed(), truncate_chars(s1, 70));
    let _ = writeln!(out, "  {} {}", "Second:".dimmed(), truncate_chars(s2, 70));
    out.push('\n');
    out
}

/// Render every entry of a ScoreSet, one line per method.
pub fn render_scores(scores: &ScoreSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<20} {:>6}  {}",
        "Method".dimmed(),
        "Score".dimmed(),
        "Band".dimmed(),
    );
    let _ = writeln!(out, "  {}", "-".repeat(48).dimmed());

    for entry in scores {
        let label = format!("{:<20}", entry.method.label());
        match entry.score() {
            Some(score) => {
                let band = SimilarityBand::from_score(score);
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    label.bold(),
                    paint(&format!("{:>6}", format_score(score)), band),
                    paint(band.as_str(), band),
                );
            }
            None => {
                let reason = entry.unavailable_reason().unwrap_or("unavailable");
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    label.bold(),
                    format!("{:>6}", "n/a").red(),
                    reason.red(),
                );
            }
        }
    }
    out.push('\n');
    out
}

/// Render the explanation of each metric.
pub fn render_methods() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Understanding the Metrics".bold());
    let _ = writeln!(
        out,
        "All metrics are normalized to range from 0 (completely different) to 1 (identical):"
    );
    for method in Method::ALL {
        let _ = writeln!(
            out,
            "  {} {}",
            format!("{}:", method.label()).bold(),
            method.description()
        );
    }
    out.push('\n');
    out
}

/// Render the colour legend for the five bands.
pub fn render_legend() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Color Legend:".bold());
    for band in SimilarityBand::ALL {
        let _ = writeln!(
            out,
            "  {} {} ({})",
            paint("■", band),
            capitalize(band.as_str()),
            band.range()
        );
    }
    out
}

/// Full comparison report: inputs, score table, explanations, legend.
pub fn render_report(s1: &str, s2: &str, scores: &ScoreSet) -> String {
    let mut out = render_inputs(s1, s2);
    out.push_str(&render_scores(scores));
    out.push_str(&render_methods());
    out.push_str(&render_legend());
    out
}

pub fn display_report(s1: &str, s2: &str, scores: &ScoreSet) {
    print!("{}", render_report(s1, s2, scores));
}

pub fn display_methods() {
    print!("{}", render_methods());
}

pub fn display_legend() {
    print!("{}", render_legend());
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
