//! Configuration types for needle

use crate::{NeedleError, DEFAULT_MAX_PATHS};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringSection,
    #[serde(default)]
    pub traceback: TracebackConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Raw scoring parameters as written in a config file.
///
/// The two modes are mutually exclusive: either `cost_table` holds
/// `[match, mismatch, gap]`, or `cost_matrix` and `key` are given together.
/// Validation happens when the section is turned into a scoring model, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_table: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_matrix: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TracebackConfig {
    /// Maximum number of co-optimal alignments to enumerate (0 = unlimited)
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub show_matrix: bool,
}

// Default value functions
fn default_cost_table() -> Option<Vec<i32>> { Some(vec![1, -1, -1]) }
fn default_max_paths() -> usize { DEFAULT_MAX_PATHS }
fn default_format() -> String { "text".to_string() }

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            cost_table: default_cost_table(),
            cost_matrix: None,
            key: None,
        }
    }
}

impl Default for TracebackConfig {
    fn default() -> Self {
        Self {
            max_paths: default_max_paths(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_matrix: false,
        }
    }
}

impl TracebackConfig {
    /// The enumeration ceiling, `None` when unlimited.
    pub fn path_limit(&self) -> Option<usize> {
        (self.max_paths > 0).then_some(self.max_paths)
    }
}

impl Config {
    /// Render as pretty TOML, the format `load_config` reads.
    pub fn to_toml(&self) -> Result<String, NeedleError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, NeedleError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), NeedleError> {
    std::fs::write(path, config.to_toml()?)?;
    Ok(())
}
