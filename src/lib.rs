// Semantik: multi-metric string similarity analysis
//
// This is the library root. Each module corresponds to one stage of a
// comparison: lexical metrics, semantic embeddings, score assembly, and
// rendering the result for the terminal.

pub mod config;
pub mod embeddings;
pub mod error;
pub mod metrics;
pub mod output;
pub mod scoring;
