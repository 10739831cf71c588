//! Error types for scoring configuration and alignment

use needle_core::NeedleError;
use thiserror::Error;

/// A scoring configuration that cannot be turned into a scoring model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cost_matrix and key are mutually exclusive with cost_table, use one or the other")]
    ConflictingModes,

    #[error("cost_table must hold match, mismatch and gap costs (got {len} values)")]
    InvalidTableLength { len: usize },

    #[error("cost_matrix and key must be supplied together")]
    IncompleteMatrixMode,

    #[error("cost_matrix has {matrix_len} values but a key of {key_len} symbols needs {expected}")]
    MatrixKeyMismatch {
        matrix_len: usize,
        key_len: usize,
        expected: usize,
    },

    #[error("no scoring supplied: provide cost_table or cost_matrix with key")]
    MissingScoring,

    #[error("symbol '{symbol}' appears more than once in key")]
    DuplicateKeySymbol { symbol: char },
}

/// Failure of an alignment call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("symbol '{symbol}' is not present in the cost matrix key")]
    UnknownSymbol { symbol: char },

    #[error("{estimated} co-optimal alignments exceed the limit of {limit}")]
    PathLimitExceeded { limit: usize, estimated: u128 },

    #[error("score overflowed a 32-bit integer at cell ({row}, {col})")]
    ScoreOverflow { row: usize, col: usize },

    #[error("alignment cancelled")]
    Cancelled,
}

/// Add two scores, reporting the cell being filled when the sum does not fit.
pub(crate) fn add_score(a: i32, b: i32, row: usize, col: usize) -> Result<i32, AlignError> {
    a.checked_add(b).ok_or(AlignError::ScoreOverflow { row, col })
}

impl From<ConfigError> for NeedleError {
    fn from(err: ConfigError) -> Self {
        NeedleError::Configuration(err.to_string())
    }
}

impl From<AlignError> for NeedleError {
    fn from(err: AlignError) -> Self {
        match err {
            AlignError::Config(e) => e.into(),
            AlignError::Cancelled => NeedleError::Cancelled,
            other => NeedleError::Alignment(other.to_string()),
        }
    }
}
