// Five-band classification of a similarity score, for display only.
//
// Thresholds are inclusive at the lower bound and cover the whole real line,
// so anything the semantic comparator might produce lands somewhere.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimilarityBand {
    VeryDifferent,
    SomewhatDifferent,
    ModeratelySimilar,
    Similar,
    VerySimilar,
}

impl SimilarityBand {
    /// Highest band first, matching how the legend is printed.
    pub const ALL: [SimilarityBand; 5] = [
        SimilarityBand::VerySimilar,
        SimilarityBand::Similar,
        SimilarityBand::ModeratelySimilar,
        SimilarityBand::SomewhatDifferent,
        SimilarityBand::VeryDifferent,
    ];

    /// Determine the band for a score (nominally 0-1).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => SimilarityBand::VerySimilar,
            s if s >= 0.6 => SimilarityBand::Similar,
            s if s >= 0.4 => SimilarityBand::ModeratelySimilar,
            s if s >= 0.2 => SimilarityBand::SomewhatDifferent,
            _ => SimilarityBand::VeryDifferent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::VerySimilar => "very similar",
            SimilarityBand::Similar => "similar",
            SimilarityBand::ModeratelySimilar => "moderately similar",
            SimilarityBand::SomewhatDifferent => "somewhat different",
            SimilarityBand::VeryDifferent => "very different",
        }
    }

    /// Range text for the legend.
    pub fn range(&self) -> &'static str {
        match self {
            SimilarityBand::VerySimilar => "≥0.8",
            SimilarityBand::Similar => "0.6-0.8",
            SimilarityBand::ModeratelySimilar => "0.4-0.6",
            SimilarityBand::SomewhatDifferent => "0.2-0.4",
            SimilarityBand::VeryDifferent => "<0.2",
        }
    }

    /// Display colour as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SimilarityBand::VerySimilar => (0x4C, 0xAF, 0x50),
            SimilarityBand::Similar => (0x8B, 0xC3, 0x4A),
            SimilarityBand::ModeratelySimilar => (0xFF, 0xEB, 0x3B),
            SimilarityBand::SomewhatDifferent => (0xFF, 0xC1, 0x07),
            SimilarityBand::VeryDifferent => (0xF4, 0x43, 0x36),
        }
    }

    /// Display colour as a `#RRGGBB` string.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SimilarityBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
