pub mod cli;

pub use needle_bio::alignment;
pub use needle_bio::stats;
pub use needle_core::{NeedleError, NeedleResult};
