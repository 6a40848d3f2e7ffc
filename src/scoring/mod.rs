// Score assembly — merging lexical and semantic results into one ScoreSet,
// and classifying each score into a display band.

pub mod band;
pub mod compare;
pub mod score_set;

pub use band::SimilarityBand;
pub use compare::Comparator;
pub use score_set::{ScoreEntry, ScoreOutcome, ScoreSet};
