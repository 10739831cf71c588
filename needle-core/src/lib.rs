//! Core utilities and types shared across the needle crates

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{load_config, save_config, Config, OutputConfig, ScoringSection, TracebackConfig};
pub use error::{NeedleError, NeedleResult};

/// Version information for the needle project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbol inserted into an aligned sequence opposite a consumed symbol
pub const GAP_SYMBOL: u8 = b'-';

/// Default ceiling on the number of co-optimal alignments enumerated per call
pub const DEFAULT_MAX_PATHS: usize = 10_000;
