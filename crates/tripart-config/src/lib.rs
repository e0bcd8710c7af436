//! Configuration system for tripart.
//!
//! Load solver configuration from TOML or YAML files to control the worker
//! count, time limit, stall detection and model options without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tripart_config::{SolverConfig, WorkerCount};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     worker_count = { count = 12 }
//!     search_strategy = "automatic"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     stall_seconds_limit = 120
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.stall_threshold(), Duration::from_secs(120));
//! assert_eq!(config.worker_count, WorkerCount::Count(12));
//! assert!(config.symmetry_breaking);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tripart_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stall threshold used when none is configured.
pub const DEFAULT_STALL_SECONDS: u64 = 600;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
///
/// Passed explicitly to the model builder and the solver backend; nothing
/// is read from process-global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Number of parallel search workers.
    #[serde(default)]
    pub worker_count: WorkerCount,

    /// Seed for diversifying the candidate order of workers after the first.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination and stall detection.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Branching strategy.
    #[serde(default)]
    pub search_strategy: SearchStrategy,

    /// Whether to pin the group of pair (0, 1) to the canonical blocks.
    #[serde(default = "default_symmetry_breaking")]
    pub symmetry_breaking: bool,

    /// Log every solution found at debug level.
    #[serde(default)]
    pub log_search_progress: bool,

    /// Directory receiving `g{g}_solution.txt`. Defaults to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_symmetry_breaking() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            worker_count: WorkerCount::default(),
            random_seed: None,
            termination: None,
            search_strategy: SearchStrategy::default(),
            symmetry_breaking: default_symmetry_breaking(),
            log_search_progress: false,
            output_dir: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == WorkerCount::Count(0) {
            return Err(ConfigError::Invalid(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if let Some(termination) = &self.termination {
            if termination.stall_seconds_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "stall_seconds_limit must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the solve time limit.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the stall detection threshold.
    pub fn with_stall_threshold_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            stall_seconds_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets a fixed worker count.
    pub fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = WorkerCount::Count(workers);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the branching strategy.
    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search_strategy = strategy;
        self
    }

    /// Disables the symmetry-breaking constraint.
    pub fn without_symmetry_breaking(mut self) -> Self {
        self.symmetry_breaking = false;
        self
    }

    /// Sets the output directory for solution files.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Returns the solve time limit, if configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripart_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     minutes_spent_limit = 2
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_secs(120)));
    /// assert_eq!(SolverConfig::default().time_limit(), None);
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the stall threshold, falling back to [`DEFAULT_STALL_SECONDS`].
    pub fn stall_threshold(&self) -> Duration {
        self.termination
            .as_ref()
            .and_then(|t| t.stall_threshold())
            .unwrap_or(Duration::from_secs(DEFAULT_STALL_SECONDS))
    }

    /// Directory for solution files.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

/// Worker count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerCount {
    /// One worker per available CPU core.
    #[default]
    Auto,

    /// Single-threaded search.
    None,

    /// Specific number of workers.
    Count(usize),
}

impl WorkerCount {
    /// Resolves the worker count to an actual number (always at least 1).
    pub fn resolve(&self) -> usize {
        match self {
            WorkerCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            WorkerCount::None => 1,
            WorkerCount::Count(n) => (*n).max(1),
        }
    }
}

impl std::fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerCount::Auto => write!(f, "Auto"),
            WorkerCount::None => write!(f, "1"),
            WorkerCount::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Branching strategy for the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Branch on the open constraint with the fewest remaining candidates.
    #[default]
    Automatic,

    /// Branch on the first open constraint in model order.
    FixedOrder,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Seconds without a new solution before a stall warning. Advisory only.
    pub stall_seconds_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_add(self.minutes_spent_limit.unwrap_or(0).saturating_mul(60));
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }

    /// Returns the stall threshold as a Duration, if any.
    pub fn stall_threshold(&self) -> Option<Duration> {
        self.stall_seconds_limit.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests;
