/// Scoring models for global alignment
use crate::alignment::error::{AlignError, ConfigError};
use needle_core::ScoringSection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cost function consumed by the aligner.
///
/// Symbols are single bytes. A multi-byte UTF-8 character such as `Å` is seen
/// as several symbols, so callers holding text should restrict it to ASCII.
pub trait ScoringScheme {
    /// Score for aligning symbol `a` of the first sequence against `b` of the second.
    fn cost(&self, a: u8, b: u8) -> Result<i32, AlignError>;

    /// Score added for every gap column.
    fn gap(&self) -> i32;

    /// Reject a sequence containing symbols the scheme cannot score.
    fn check_sequence(&self, _seq: &[u8]) -> Result<(), AlignError> {
        Ok(())
    }
}

impl<S: ScoringScheme + ?Sized> ScoringScheme for &S {
    fn cost(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        (**self).cost(a, b)
    }

    fn gap(&self) -> i32 {
        (**self).gap()
    }

    fn check_sequence(&self, seq: &[u8]) -> Result<(), AlignError> {
        (**self).check_sequence(seq)
    }
}

/// Row/column order of the BLOSUM62 preset
pub const BLOSUM62_KEY: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM62: [[i32; 24]; 24] = [
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4],
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4],
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4],
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4],
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4],
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4],
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4],
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4],
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4],
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4],
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4],
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4],
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4],
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4],
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4],
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4],
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4],
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4],
    [-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4],
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1],
];

/// The two mutually exclusive ways of describing a scoring scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoringConfig {
    /// Constant match, mismatch and gap scores
    Table {
        match_score: i32,
        mismatch_score: i32,
        gap: i32,
    },
    /// Flat `k * k` pair matrix ordered by `key`, followed by the gap score
    Matrix { matrix: Vec<i32>, key: Vec<u8> },
}

impl ScoringConfig {
    pub fn table(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        ScoringConfig::Table {
            match_score,
            mismatch_score,
            gap,
        }
    }

    pub fn matrix(matrix: impl Into<Vec<i32>>, key: impl AsRef<[u8]>) -> Self {
        ScoringConfig::Matrix {
            matrix: matrix.into(),
            key: key.as_ref().to_vec(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::table(1, -1, -1)
    }
}

/// A validated scoring configuration.
///
/// In matrix mode the symbol-to-index lookup is built once here and reused by
/// every `cost` call.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    config: ScoringConfig,
    index_map: HashMap<u8, usize>,
    gap: i32,
}

impl ScoringModel {
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        match &config {
            ScoringConfig::Table { gap, .. } => Ok(Self {
                gap: *gap,
                index_map: HashMap::new(),
                config,
            }),
            ScoringConfig::Matrix { matrix, key } => {
                let expected = key.len() * key.len() + 1;
                if matrix.len() != expected {
                    return Err(ConfigError::MatrixKeyMismatch {
                        matrix_len: matrix.len(),
                        key_len: key.len(),
                        expected,
                    });
                }

                let mut index_map = HashMap::with_capacity(key.len());
                for (i, &symbol) in key.iter().enumerate() {
                    if index_map.insert(symbol, i).is_some() {
                        return Err(ConfigError::DuplicateKeySymbol {
                            symbol: char::from(symbol),
                        });
                    }
                }

                Ok(Self {
                    gap: matrix[expected - 1],
                    index_map,
                    config,
                })
            }
        }
    }

    /// Build a model from optional parts, where the table and the matrix/key
    /// pair exclude each other.
    pub fn configure(
        cost_table: Option<&[i32]>,
        cost_matrix: Option<&[i32]>,
        key: Option<&[u8]>,
    ) -> Result<Self, ConfigError> {
        if cost_table.is_some() && cost_matrix.is_some() && key.is_some() {
            return Err(ConfigError::ConflictingModes);
        }

        if let Some(table) = cost_table {
            if table.len() != 3 {
                return Err(ConfigError::InvalidTableLength { len: table.len() });
            }
        }

        if cost_matrix.is_some() != key.is_some() {
            return Err(ConfigError::IncompleteMatrixMode);
        }

        match (cost_table, cost_matrix, key) {
            (Some(table), None, None) => Self::new(ScoringConfig::table(table[0], table[1], table[2])),
            (None, Some(matrix), Some(key)) => Self::new(ScoringConfig::matrix(matrix, key)),
            _ => Err(ConfigError::MissingScoring),
        }
    }

    /// Build a model from the `[scoring]` section of a config file.
    pub fn from_section(section: &ScoringSection) -> Result<Self, ConfigError> {
        Self::configure(
            section.cost_table.as_deref(),
            section.cost_matrix.as_deref(),
            section.key.as_deref().map(str::as_bytes),
        )
    }

    /// Table-mode model; always valid.
    pub fn table(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            config: ScoringConfig::table(match_score, mismatch_score, gap),
            index_map: HashMap::new(),
            gap,
        }
    }

    /// Matrix-mode model over the 24-symbol BLOSUM62 protein alphabet.
    pub fn blosum62(gap: i32) -> Self {
        let mut matrix: Vec<i32> = BLOSUM62.iter().flatten().copied().collect();
        matrix.push(gap);

        Self {
            config: ScoringConfig::Matrix {
                matrix,
                key: BLOSUM62_KEY.to_vec(),
            },
            index_map: BLOSUM62_KEY
                .iter()
                .enumerate()
                .map(|(i, &symbol)| (symbol, i))
                .collect(),
            gap,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Symbol order of the cost matrix, `None` in table mode.
    pub fn key(&self) -> Option<&[u8]> {
        match &self.config {
            ScoringConfig::Matrix { key, .. } => Some(key),
            ScoringConfig::Table { .. } => None,
        }
    }

    /// Whether `cost(a, b) == cost(b, a)` for every pair of scorable symbols.
    pub fn is_symmetric(&self) -> bool {
        match &self.config {
            ScoringConfig::Table { .. } => true,
            ScoringConfig::Matrix { matrix, key } => {
                let k = key.len();
                (0..k).all(|i| (0..i).all(|j| matrix[i * k + j] == matrix[j * k + i]))
            }
        }
    }

    fn index_of(&self, symbol: u8) -> Result<usize, AlignError> {
        self.index_map
            .get(&symbol)
            .copied()
            .ok_or(AlignError::UnknownSymbol {
                symbol: char::from(symbol),
            })
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::table(1, -1, -1)
    }
}

impl ScoringScheme for ScoringModel {
    fn cost(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        match &self.config {
            ScoringConfig::Table {
                match_score,
                mismatch_score,
                ..
            } => Ok(if a == b { *match_score } else { *mismatch_score }),
            ScoringConfig::Matrix { matrix, key } => {
                let row = self.index_of(a)?;
                let col = self.index_of(b)?;
                Ok(matrix[row * key.len() + col])
            }
        }
    }

    fn gap(&self) -> i32 {
        self.gap
    }

    fn check_sequence(&self, seq: &[u8]) -> Result<(), AlignError> {
        if self.key().is_some() {
            for &symbol in seq {
                self.index_of(symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_mode_costs() {
        let model = ScoringModel::configure(Some(&[2, -3, -1][..]), None, None).unwrap();

        assert_eq!(model.cost(b'A', b'A').unwrap(), 2);
        assert_eq!(model.cost(b'A', b'G').unwrap(), -3);
        assert_eq!(model.gap(), -1);
        assert!(model.key().is_none());
    }

    #[test]
    fn test_matrix_mode_costs() {
        let matrix = [1, 2, 3, 4, 5, 6, 7, 8, 9, -4];
        let model = ScoringModel::configure(None, Some(&matrix[..]), Some(&b"ABC"[..])).unwrap();

        assert_eq!(model.cost(b'A', b'A').unwrap(), 1);
        assert_eq!(model.cost(b'A', b'C').unwrap(), 3);
        assert_eq!(model.cost(b'B', b'A').unwrap(), 4);
        assert_eq!(model.cost(b'C', b'B').unwrap(), 8);
        assert_eq!(model.gap(), -4);
        assert_eq!(model.key(), Some(&b"ABC"[..]));
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        let model = ScoringModel::configure(None, Some(&[2, -1, -1, 2, -2][..]), Some(&b"AC"[..])).unwrap();

        assert_eq!(
            model.cost(b'A', b'G'),
            Err(AlignError::UnknownSymbol { symbol: 'G' })
        );
        assert_eq!(
            model.check_sequence(b"ACCAT"),
            Err(AlignError::UnknownSymbol { symbol: 'T' })
        );
        assert!(model.check_sequence(b"ACCA").is_ok());
    }

    #[test]
    fn test_validation_order() {
        let table: &[i32] = &[1, -1, -1];
        let matrix: &[i32] = &[2, -1, -1, 2, -2];
        let key: &[u8] = b"AC";

        assert_eq!(
            ScoringModel::configure(Some(table), Some(matrix), Some(key)).unwrap_err(),
            ConfigError::ConflictingModes
        );
        // Conflict is reported ahead of a bad table length
        assert_eq!(
            ScoringModel::configure(Some(&[1, -1][..]), Some(matrix), Some(key)).unwrap_err(),
            ConfigError::ConflictingModes
        );
        assert_eq!(
            ScoringModel::configure(Some(&[1, -1][..]), None, None).unwrap_err(),
            ConfigError::InvalidTableLength { len: 2 }
        );
        assert_eq!(
            ScoringModel::configure(None, Some(matrix), None).unwrap_err(),
            ConfigError::IncompleteMatrixMode
        );
        assert_eq!(
            ScoringModel::configure(None, None, Some(key)).unwrap_err(),
            ConfigError::IncompleteMatrixMode
        );
        assert_eq!(
            ScoringModel::configure(Some(table), Some(matrix), None).unwrap_err(),
            ConfigError::IncompleteMatrixMode
        );
        assert_eq!(
            ScoringModel::configure(None, Some(&[2, -1, -1, 2][..]), Some(key)).unwrap_err(),
            ConfigError::MatrixKeyMismatch {
                matrix_len: 4,
                key_len: 2,
                expected: 5
            }
        );
        assert_eq!(
            ScoringModel::configure(None, None, None).unwrap_err(),
            ConfigError::MissingScoring
        );
    }

    #[test]
    fn test_duplicate_key_symbol() {
        let err = ScoringModel::new(ScoringConfig::matrix(vec![0; 5], b"AA")).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateKeySymbol { symbol: 'A' });
    }

    #[test]
    fn test_from_section() {
        let section = ScoringSection {
            cost_table: None,
            cost_matrix: Some(vec![2, -1, -1, 2, -2]),
            key: Some("AC".to_string()),
        };
        let model = ScoringModel::from_section(&section).unwrap();
        assert_eq!(model.gap(), -2);
        assert_eq!(model.cost(b'C', b'C').unwrap(), 2);

        let default_model = ScoringModel::from_section(&ScoringSection::default()).unwrap();
        assert_eq!(default_model.config(), &ScoringConfig::default());
    }

    #[test]
    fn test_blosum62_preset() {
        let model = ScoringModel::blosum62(-4);

        assert_eq!(model.cost(b'W', b'W').unwrap(), 11);
        assert_eq!(model.cost(b'A', b'R').unwrap(), -1);
        assert_eq!(model.cost(b'R', b'A').unwrap(), -1);
        assert_eq!(model.gap(), -4);
        assert!(model.is_symmetric());
        // Preset is identical to one built through validation
        let rebuilt = ScoringModel::new(model.config().clone()).unwrap();
        assert_eq!(rebuilt.cost(b'H', b'Y').unwrap(), 2);
    }

    #[test]
    fn test_asymmetric_matrix_detected() {
        let model = ScoringModel::configure(None, Some(&[1, 0, -1, 1, -1][..]), Some(&b"XY"[..])).unwrap();
        assert!(!model.is_symmetric());
        assert!(ScoringModel::table(5, -4, -2).is_symmetric());
    }
}
