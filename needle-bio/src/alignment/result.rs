use crate::alignment::matrix::{CoordinatePath, ScoreMatrix};
use needle_core::GAP_SYMBOL;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One global alignment: both sequences padded with `-` to a common length, and its score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    #[serde(with = "symbols")]
    pub aligned_seq1: Vec<u8>,
    #[serde(with = "symbols")]
    pub aligned_seq2: Vec<u8>,
    pub score: i32,
}

/// Single-path result together with the filled score matrix and the cells walked.
#[derive(Debug, Clone)]
pub struct VerboseAlignment {
    pub alignment: Alignment,
    pub matrix: ScoreMatrix,
    pub path: CoordinatePath,
}

impl Alignment {
    pub fn new(aligned_seq1: Vec<u8>, aligned_seq2: Vec<u8>, score: i32) -> Self {
        debug_assert_eq!(aligned_seq1.len(), aligned_seq2.len());
        Self {
            aligned_seq1,
            aligned_seq2,
            score,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn seq1_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq1)
    }

    pub fn seq2_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq2)
    }

    /// Column markers: '|' for match, 'X' for mismatch, ' ' for gap
    pub fn alignment_string(&self) -> Vec<u8> {
        self.columns()
            .map(|(a, b)| {
                if a == GAP_SYMBOL || b == GAP_SYMBOL {
                    b' '
                } else if a == b {
                    b'|'
                } else {
                    b'X'
                }
            })
            .collect()
    }

    /// Fraction of columns holding identical symbols (0.0 for an empty alignment).
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self
            .columns()
            .filter(|&(a, b)| a == b && a != GAP_SYMBOL)
            .count();
        matches as f64 / self.len() as f64
    }

    pub fn gap_count(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a == GAP_SYMBOL || b == GAP_SYMBOL)
            .count()
    }

    /// Both sides with gaps removed; equals the original inputs.
    pub fn ungapped(&self) -> (Vec<u8>, Vec<u8>) {
        let strip = |s: &[u8]| s.iter().copied().filter(|&c| c != GAP_SYMBOL).collect();
        (strip(&self.aligned_seq1), strip(&self.aligned_seq2))
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_seq1
            .iter()
            .copied()
            .zip(self.aligned_seq2.iter().copied())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.seq1_str())?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.alignment_string()))?;
        writeln!(f, "{}", self.seq2_str())?;
        write!(f, "score: {}", self.score)
    }
}

/// Aligned symbols serialize as text rather than byte arrays.
mod symbols {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}
