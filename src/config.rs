//! Scan configuration
//!
//! # Environment Variables
//!
//! - `STACKPROBE_MAX_DEPTH`: Maximum directory depth below the root - default: unlimited
//! - `STACKPROBE_FOLLOW_LINKS`: Follow symbolic links (true|false) - default: "false"
//! - `STACKPROBE_WORKERS`: Classification worker threads - default: available parallelism
//! - `STACKPROBE_MIN_LANGUAGE_SHARE`: Minimum share of source files for an
//!   extension-only language to be reported - default: "0.02"
//!
//! # Example
//!
//! ```no_run
//! use stackprobe::ScanConfig;
//!
//! let config = ScanConfig::from_env().expect("Invalid configuration");
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::thread;
use thiserror::Error;

const DEFAULT_MIN_LANGUAGE_SHARE: f64 = 0.02;
const MAX_WORKERS: usize = 256;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Directories deeper than this below the root are not read
    pub max_depth: Option<usize>,

    /// Descend into symlinked directories (cycles are still cut)
    pub follow_links: bool,

    /// Size of the classification worker pool
    pub workers: usize,

    /// Extension-only languages under this share of the evidence are dropped
    pub min_language_share: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_links: false,
            workers: default_workers(),
            min_language_share: DEFAULT_MIN_LANGUAGE_SHARE,
        }
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn parse_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                field: name.to_string(),
                error: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

impl ScanConfig {
    /// Reads `STACKPROBE_*` variables over the defaults
    ///
    /// A variable that is set but unparseable is an error, not a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_depth: parse_var("STACKPROBE_MAX_DEPTH")?.or(defaults.max_depth),
            follow_links: parse_var("STACKPROBE_FOLLOW_LINKS")?.unwrap_or(defaults.follow_links),
            workers: parse_var("STACKPROBE_WORKERS")?.unwrap_or(defaults.workers),
            min_language_share: parse_var("STACKPROBE_MIN_LANGUAGE_SHARE")?
                .unwrap_or(defaults.min_language_share),
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ValidationFailed(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if self.workers > MAX_WORKERS {
            return Err(ConfigError::ValidationFailed(format!(
                "Worker count cannot exceed {}",
                MAX_WORKERS
            )));
        }
        if !(0.0..1.0).contains(&self.min_language_share) {
            return Err(ConfigError::ValidationFailed(format!(
                "Minimum language share must be in [0, 1), got {}",
                self.min_language_share
            )));
        }
        Ok(())
    }
}
