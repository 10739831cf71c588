//! Resource bounds for the all-paths traceback

use crate::alignment::error::AlignError;
use needle_core::{TracebackConfig, DEFAULT_MAX_PATHS};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ceiling on the number of co-optimal alignments a single call may enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracebackLimits {
    pub max_paths: Option<usize>,
}

impl TracebackLimits {
    pub fn unlimited() -> Self {
        Self { max_paths: None }
    }

    pub fn with_max_paths(max_paths: usize) -> Self {
        Self {
            max_paths: Some(max_paths),
        }
    }

    pub fn from_config(config: &TracebackConfig) -> Self {
        Self {
            max_paths: config.path_limit(),
        }
    }

    /// Reject an enumeration whose path count is over the ceiling.
    pub fn check(&self, estimated: u128) -> Result<(), AlignError> {
        match self.max_paths {
            Some(limit) if estimated > limit as u128 => {
                Err(AlignError::PathLimitExceeded { limit, estimated })
            }
            _ => Ok(()),
        }
    }
}

impl Default for TracebackLimits {
    fn default() -> Self {
        Self::with_max_paths(DEFAULT_MAX_PATHS)
    }
}

/// Cooperative cancellation flag shared between a caller and a running alignment.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> Result<(), AlignError> {
        if self.is_cancelled() {
            Err(AlignError::Cancelled)
        } else {
            Ok(())
        }
    }
}
