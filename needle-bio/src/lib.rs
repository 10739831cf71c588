//! Global pairwise alignment for needle
//!
//! Needleman-Wunsch alignment under a table or matrix scoring model, with a
//! single deterministic traceback and a traceback that enumerates every
//! co-optimal alignment.

pub mod alignment;
pub mod stats;

// Re-export commonly used types
pub use alignment::{
    align, align_all, align_verbose, AlignError, Alignment, CancellationToken, ConfigError,
    NeedlemanWunsch, ScoringConfig, ScoringModel, ScoringScheme, TracebackLimits,
    VerboseAlignment,
};
