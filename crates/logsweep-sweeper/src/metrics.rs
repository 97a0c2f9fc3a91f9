//! Metrics collection for sweep operations

use logsweep_domain::Severity;
use std::collections::HashMap;

/// Metrics collected during sweep operations
///
/// Tracks files deleted per severity, bytes freed, and the failure counters
/// that distinguish a clean pass from a degraded one.
#[derive(Debug, Clone, Default)]
pub struct SweepMetrics {
    /// Files deleted per severity
    pub deleted: HashMap<Severity, usize>,

    /// Total bytes reclaimed by deletions
    pub bytes_freed: u64,

    /// Deletions that failed (the pass continued past them)
    pub delete_failures: usize,

    /// Directories skipped because they could not be opened or listed
    pub dirs_skipped: usize,

    /// Eviction candidates skipped because they were protected
    pub protected_skips: usize,

    /// Total sweep passes completed
    pub sweep_count: usize,
}

impl SweepMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful file deletion
    pub fn record_deletion(&mut self, severity: Severity, size: u64) {
        *self.deleted.entry(severity).or_insert(0) += 1;
        self.bytes_freed += size;
    }

    /// Record a failed file deletion
    pub fn record_delete_failure(&mut self) {
        self.delete_failures += 1;
    }

    /// Record a directory that could not be listed
    pub fn record_dir_skipped(&mut self) {
        self.dirs_skipped += 1;
    }

    /// Record an eviction candidate pinned by the protected list
    pub fn record_protected_skip(&mut self) {
        self.protected_skips += 1;
    }

    /// Record a completed sweep pass
    pub fn record_sweep(&mut self) {
        self.sweep_count += 1;
    }

    /// Get total files deleted across all severities
    pub fn total_deleted(&self) -> usize {
        self.deleted.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Sweep Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Sweep passes: {}", self.sweep_count),
            format!("Bytes freed: {}", self.bytes_freed),
        ];

        if !self.deleted.is_empty() {
            lines.push("Deletions by severity:".to_string());
            for severity in Severity::ALL {
                if let Some(count) = self.deleted.get(&severity) {
                    lines.push(format!("  {}: {}", severity, count));
                }
            }
            lines.push(format!("  Total: {}", self.total_deleted()));
        }

        if self.delete_failures > 0 {
            lines.push(format!("Delete failures: {}", self.delete_failures));
        }
        if self.dirs_skipped > 0 {
            lines.push(format!("Directories skipped: {}", self.dirs_skipped));
        }
        if self.protected_skips > 0 {
            lines.push(format!("Protected files skipped: {}", self.protected_skips));
        }

        lines.join("\n")
    }
}
