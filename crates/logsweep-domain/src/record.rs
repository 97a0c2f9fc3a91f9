//! Per-pass records - what the indexer knows about one matched file

use crate::Severity;

/// Structured result of matching one filename against the log-name pattern
///
/// Only the pieces the retention policy needs are captured. The host token is
/// deliberately discarded: containerized deployments regenerate hostnames, so
/// ordering must depend on the sort key alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLogName {
    /// Severity token found in the filename
    pub severity: Severity,

    /// Chronological sort key (e.g. `20160219-170516`)
    ///
    /// Only the leading run of non-dot characters after the severity token;
    /// a trailing `.pid` suffix is not part of the key. Lexicographic order
    /// on these keys is chronological order, a property guaranteed by the
    /// file-creation convention rather than enforced here.
    pub sort_key: String,
}

/// One matched log file, as seen during a single cleanup pass
///
/// Records are constructed fresh on every invocation and discarded
/// immediately after; nothing survives a pass except the files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileRecord {
    /// Bare filename within its directory
    pub name: String,

    /// Chronological sort key extracted from the name
    pub sort_key: String,

    /// Byte length at time of listing
    pub size: u64,

    /// Severity token extracted from the name
    pub severity: Severity,
}

impl LogFileRecord {
    /// Build a record from a parsed name plus listing metadata
    pub fn new(name: impl Into<String>, parsed: ParsedLogName, size: u64) -> Self {
        Self {
            name: name.into(),
            sort_key: parsed.sort_key,
            size,
            severity: parsed.severity,
        }
    }

    /// Ordering key for eviction: oldest sort key first, filename as the
    /// deterministic tie-break when two files share a timestamp
    pub fn eviction_key(&self) -> (&str, &str) {
        (&self.sort_key, &self.name)
    }
}
