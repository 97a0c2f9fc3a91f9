//! Core sweeper implementation - indexing and oldest-first eviction

use std::path::Path;

use logsweep_domain::{LogFileRecord, ProcessIdentity};

use crate::{LogNamePattern, SweepConfig, SweepError, SweepMetrics};

/// Sweeper for disk-space-bounded log retention
///
/// One sweep pass visits each configured directory independently: the full
/// byte budget applies per directory, and a failure in one directory never
/// affects the others. Passes are stateless; the only state that survives an
/// invocation is the set of files left on disk.
///
/// # Examples
///
/// ```no_run
/// use logsweep_domain::ProcessIdentity;
/// use logsweep_sweeper::{SweepConfig, Sweeper};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SweepConfig::new(Some(64 * 1024 * 1024), vec!["/var/log/myapp".into()]);
/// let mut sweeper = Sweeper::new(config, ProcessIdentity::new("myapp", "alice"))?;
///
/// let metrics = sweeper.sweep();
/// println!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct Sweeper {
    config: SweepConfig,
    pattern: LogNamePattern,
    metrics: SweepMetrics,
}

impl Sweeper {
    /// Create a sweeper for the given configuration and identity
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Pattern`] if the identity strings cannot be
    /// compiled into a match pattern. This is fatal to sweeping but must not
    /// be fatal to the host process; callers report it once and carry on.
    pub fn new(config: SweepConfig, identity: ProcessIdentity) -> Result<Self, SweepError> {
        let pattern = LogNamePattern::new(&identity)?;
        Ok(Self {
            config,
            pattern,
            metrics: SweepMetrics::new(),
        })
    }

    /// Get a reference to the accumulated metrics
    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Perform one cleanup pass over every configured directory
    ///
    /// With the budget unset this returns immediately without listing any
    /// directory. Filesystem failures are absorbed: an unlistable directory
    /// is skipped whole, a failed delete is reported to stderr and the pass
    /// continues. The method itself cannot fail.
    ///
    /// Returns a snapshot of the metrics after the pass.
    pub fn sweep(&mut self) -> SweepMetrics {
        let Some(budget) = self.config.budget_bytes else {
            return self.metrics.clone();
        };

        let dirs = self.config.log_dirs.clone();
        for dir in dirs {
            match self.index_dir(&dir) {
                Some((records, total)) => self.enforce(&dir, records, total, budget),
                None => {
                    tracing::debug!(dir = %dir.display(), "Skipping unlistable log directory");
                    self.metrics.record_dir_skipped();
                }
            }
        }

        self.metrics.record_sweep();
        self.metrics.clone()
    }

    /// Index one directory: match entries against the pattern and total up
    /// their sizes
    ///
    /// Returns `None` when the directory cannot be opened or fully listed;
    /// partial accounting would make the eviction math lie, so the directory
    /// is skipped whole. Entries are not filtered by file type: a
    /// subdirectory that happens to match the convention is indexed like a
    /// file and its deletion fails down the recoverable path.
    fn index_dir(&self, dir: &Path) -> Option<(Vec<LogFileRecord>, u64)> {
        let entries: Vec<std::fs::DirEntry> = std::fs::read_dir(dir)
            .ok()?
            .collect::<Result<_, _>>()
            .ok()?;

        let mut records = Vec::new();
        let mut total = 0u64;

        for entry in entries {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(parsed) = self.pattern.match_name(name) else {
                continue;
            };
            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let record = LogFileRecord::new(name, parsed, metadata.len());
            total += record.size;
            records.push(record);
        }

        Some((records, total))
    }

    /// Evict oldest-first until the directory total is at or under budget
    ///
    /// A failed delete still decrements the running total: the loop
    /// terminates based on intended removals, accepting that the on-disk
    /// total may stay above budget when deletions fail. Protected paths are
    /// skipped without decrementing, keeping the budget math honest.
    fn enforce(&mut self, dir: &Path, mut records: Vec<LogFileRecord>, mut total: u64, budget: u64) {
        // Save the sort if there is nothing to clean up.
        if total <= budget {
            return;
        }

        records.sort_by(|a, b| a.eviction_key().cmp(&b.eviction_key()));

        let mut queue = records.into_iter();
        while total > budget {
            let Some(record) = queue.next() else {
                break;
            };

            let path = dir.join(&record.name);
            if self.config.is_protected(&path) {
                tracing::debug!(path = %path.display(), "Eviction candidate is protected, keeping");
                self.metrics.record_protected_skip();
                continue;
            }

            if self.config.dry_run {
                tracing::info!(
                    path = %path.display(),
                    size = record.size,
                    "DRY RUN: would delete old logfile"
                );
                total -= record.size;
                continue;
            }

            match std::fs::remove_file(&path) {
                Ok(()) => {
                    self.metrics.record_deletion(record.severity, record.size);
                }
                Err(e) => {
                    // Directly to stderr: this facility serves the logging
                    // subsystem, and reporting through it could recurse.
                    eprintln!("Could not clean up old logfile {:?}: {}", path, e);
                    self.metrics.record_delete_failure();
                }
            }
            total -= record.size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn identity() -> ProcessIdentity {
        ProcessIdentity::new("myserver", "alice")
    }

    fn log_name(host: &str, severity: &str, sort_key: &str) -> String {
        format!("myserver.{}.alice.log.{}.{}", host, severity, sort_key)
    }

    fn write_file(dir: &Path, name: &str, size: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![b'x'; size]).unwrap();
        path
    }

    fn sweeper_for(dir: &Path, budget: Option<u64>) -> Sweeper {
        let config = SweepConfig::new(budget, vec![dir.to_path_buf()]);
        Sweeper::new(config, identity()).unwrap()
    }

    fn surviving(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_oldest_first_eviction() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 6);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 4);
        write_file(tmp.path(), &log_name("host", "INFO", "20240103-000000"), 2);

        let mut sweeper = sweeper_for(tmp.path(), Some(8));
        let metrics = sweeper.sweep();

        // Total 12 > 8: only the oldest (size 6) goes, leaving 6 <= 8.
        assert_eq!(metrics.total_deleted(), 1);
        assert_eq!(metrics.bytes_freed, 6);
        assert_eq!(
            surviving(tmp.path()),
            vec![
                log_name("host", "INFO", "20240102-000000"),
                log_name("host", "INFO", "20240103-000000"),
            ]
        );
    }

    #[test]
    fn test_disabled_budget_lists_nothing() {
        let config = SweepConfig::new(None, vec!["/definitely/not/a/real/path".into()]);
        let mut sweeper = Sweeper::new(config, identity()).unwrap();

        let metrics = sweeper.sweep();

        // A missing directory would count as skipped if it were listed.
        assert_eq!(metrics.dirs_skipped, 0);
        assert_eq!(metrics.total_deleted(), 0);
        assert_eq!(metrics.sweep_count, 0);
    }

    #[test]
    fn test_early_exit_under_budget() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 3);
        write_file(tmp.path(), &log_name("host", "ERROR", "20240102-000000"), 3);

        let mut sweeper = sweeper_for(tmp.path(), Some(10));
        let metrics = sweeper.sweep();

        assert_eq!(metrics.total_deleted(), 0);
        assert_eq!(surviving(tmp.path()).len(), 2);
    }

    #[test]
    fn test_exactly_at_budget_deletes_nothing() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 10);

        let mut sweeper = sweeper_for(tmp.path(), Some(10));
        let metrics = sweeper.sweep();

        assert_eq!(metrics.total_deleted(), 0);
    }

    #[test]
    fn test_non_matching_files_untouched() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "otherprog.host.alice.log.INFO.20240101-000000", 100);
        write_file(tmp.path(), "myserver.host.bob.log.INFO.20240101-000000", 100);
        write_file(tmp.path(), "myserver.host.alice.log.DEBUG.20240101-000000", 100);
        write_file(tmp.path(), "notes.txt", 100);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 1);

        let mut sweeper = sweeper_for(tmp.path(), Some(2));
        let metrics = sweeper.sweep();

        // Matched total is 1 <= 2; the 400 foreign bytes are never counted.
        assert_eq!(metrics.total_deleted(), 0);
        assert_eq!(surviving(tmp.path()).len(), 5);
    }

    #[test]
    fn test_idempotent_second_pass() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 6);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 6);

        let mut sweeper = sweeper_for(tmp.path(), Some(8));
        let first = sweeper.sweep();
        assert_eq!(first.total_deleted(), 1);

        let second = sweeper.sweep();
        // No new files: the second pass deletes nothing further.
        assert_eq!(second.total_deleted(), 1);
        assert_eq!(second.sweep_count, 2);
    }

    #[test]
    fn test_duplicate_sort_keys_all_retained_in_index() {
        let tmp = TempDir::new().unwrap();
        // Two severities rotated within the same second share a sort key.
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 4);
        write_file(tmp.path(), &log_name("host", "ERROR", "20240101-000000"), 4);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 4);

        let mut sweeper = sweeper_for(tmp.path(), Some(4));
        let metrics = sweeper.sweep();

        // All three were counted (12 > 4); both same-second files evict
        // before the newer one.
        assert_eq!(metrics.total_deleted(), 2);
        assert_eq!(
            surviving(tmp.path()),
            vec![log_name("host", "INFO", "20240102-000000")]
        );
    }

    #[test]
    fn test_protected_file_survives() {
        let tmp = TempDir::new().unwrap();
        let oldest = write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 6);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 6);

        let mut config = SweepConfig::new(Some(8), vec![tmp.path().to_path_buf()]);
        config.protected = vec![oldest.clone()];
        let mut sweeper = Sweeper::new(config, identity()).unwrap();

        let metrics = sweeper.sweep();

        // The oldest is pinned; the enforcer moves on to the next-oldest.
        assert!(oldest.exists());
        assert_eq!(metrics.protected_skips, 1);
        assert_eq!(metrics.total_deleted(), 1);
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 6);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 6);

        let mut config = SweepConfig::new(Some(8), vec![tmp.path().to_path_buf()]);
        config.dry_run = true;
        let mut sweeper = Sweeper::new(config, identity()).unwrap();

        let metrics = sweeper.sweep();

        assert_eq!(metrics.total_deleted(), 0);
        assert_eq!(surviving(tmp.path()).len(), 2);
    }

    #[test]
    fn test_unlistable_directory_skipped() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 6);
        write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 6);

        let config = SweepConfig::new(
            Some(8),
            vec!["/definitely/not/a/real/path".into(), tmp.path().to_path_buf()],
        );
        let mut sweeper = Sweeper::new(config, identity()).unwrap();

        let metrics = sweeper.sweep();

        // The bad directory is skipped whole; the good one is still swept.
        assert_eq!(metrics.dirs_skipped, 1);
        assert_eq!(metrics.total_deleted(), 1);
    }

    #[test]
    fn test_delete_failure_is_reported_and_pass_continues() {
        let tmp = TempDir::new().unwrap();
        // A non-empty subdirectory matching the convention is indexed like a
        // file, and remove_file cannot delete it.
        let subdir = tmp.path().join(log_name("host", "INFO", "20240101-000000"));
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("leftover"), b"x").unwrap();
        let newer = write_file(tmp.path(), &log_name("host", "INFO", "20240102-000000"), 4);

        let mut sweeper = sweeper_for(tmp.path(), Some(0));
        let metrics = sweeper.sweep();

        // The failed delete is counted, its size still comes off the running
        // total, and the pass moves on to the next candidate.
        assert_eq!(metrics.delete_failures, 1);
        assert_eq!(metrics.total_deleted(), 1);
        assert!(subdir.exists(), "subdirectory survives the failed delete");
        assert!(!newer.exists(), "pass continues past the failure");
    }

    #[test]
    fn test_budget_zero_leaves_nothing_matched() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), &log_name("host", "INFO", "20240101-000000"), 1);
        write_file(tmp.path(), &log_name("host", "WARNING", "20240102-000000"), 1);
        write_file(tmp.path(), "notes.txt", 1);

        let mut sweeper = sweeper_for(tmp.path(), Some(0));
        let metrics = sweeper.sweep();

        assert_eq!(metrics.total_deleted(), 2);
        assert_eq!(surviving(tmp.path()), vec!["notes.txt".to_string()]);
    }

    #[test]
    fn test_per_directory_budget_is_independent() {
        let tmp_a = TempDir::new().unwrap();
        let tmp_b = TempDir::new().unwrap();
        write_file(tmp_a.path(), &log_name("host", "INFO", "20240101-000000"), 5);
        write_file(tmp_b.path(), &log_name("host", "INFO", "20240101-000000"), 5);

        let config = SweepConfig::new(
            Some(8),
            vec![tmp_a.path().to_path_buf(), tmp_b.path().to_path_buf()],
        );
        let mut sweeper = Sweeper::new(config, identity()).unwrap();

        let metrics = sweeper.sweep();

        // 5 + 5 would exceed a shared budget, but each directory gets the
        // full allowance on its own.
        assert_eq!(metrics.total_deleted(), 0);
    }
}
