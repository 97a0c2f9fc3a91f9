//! Configuration for sweep operations
//!
//! Defines the byte budget, the candidate directories, and the worker cadence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the sweeper
///
/// The budget is applied per directory, not split across them: each directory
/// independently gets the full allowance. This keeps every pass
/// directory-local and side-effect-isolated.
///
/// # Examples
///
/// ```
/// use logsweep_sweeper::SweepConfig;
///
/// // 64 MiB per directory
/// let config = SweepConfig::new(Some(64 * 1024 * 1024), vec!["/var/log/myapp".into()]);
/// assert!(config.is_enabled());
///
/// // Disabled: nothing is listed, nothing is deleted
/// let config = SweepConfig::disabled();
/// assert!(!config.is_enabled());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Maximum total byte footprint of matched files, per directory
    ///
    /// `None` disables the entire facility: no directory is even listed.
    /// Default: `None`
    #[serde(default)]
    pub budget_bytes: Option<u64>,

    /// Directories to scan, in order
    /// Default: empty
    #[serde(default)]
    pub log_dirs: Vec<PathBuf>,

    /// Dry-run mode: log what would be deleted without actually deleting
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Paths that must never be deleted, typically the files the logger
    /// currently holds open for writing
    /// Default: empty
    #[serde(default)]
    pub protected: Vec<PathBuf>,

    /// How often the background worker runs a pass (in minutes)
    /// Default: every 15 minutes
    #[serde(default = "default_sweep_interval_minutes")]
    pub sweep_interval_minutes: u64,
}

fn default_sweep_interval_minutes() -> u64 {
    15
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            budget_bytes: None,
            log_dirs: Vec::new(),
            dry_run: false,
            protected: Vec::new(),
            sweep_interval_minutes: default_sweep_interval_minutes(),
        }
    }
}

impl SweepConfig {
    /// Create a configuration with the given budget and directories
    pub fn new(budget_bytes: Option<u64>, log_dirs: Vec<PathBuf>) -> Self {
        Self {
            budget_bytes,
            log_dirs,
            ..Default::default()
        }
    }

    /// Create a configuration with cleanup disabled
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether any cleanup will run at all
    pub fn is_enabled(&self) -> bool {
        self.budget_bytes.is_some()
    }

    /// Get the worker interval as a Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_minutes * 60)
    }

    /// Whether the given path is pinned against deletion
    pub fn is_protected(&self, path: &std::path::Path) -> bool {
        self.protected.iter().any(|p| p == path)
    }
}
