pub mod error;
pub mod limits;
pub mod matrix;
pub mod nw_aligner;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use error::{AlignError, ConfigError};
pub use limits::{CancellationToken, TracebackLimits};
pub use matrix::{CoordinatePath, DirectionMatrix, Directions, ScoreMatrix};
pub use nw_aligner::{align, align_all, align_verbose, NeedlemanWunsch};
pub use result::{Alignment, VerboseAlignment};
pub use scoring::{ScoringConfig, ScoringModel, ScoringScheme, BLOSUM62_KEY};
