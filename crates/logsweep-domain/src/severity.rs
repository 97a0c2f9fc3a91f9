//! Severity module - the fixed token set embedded in log filenames

/// Severity of a rotated log file
///
/// Loggers following the `<program>.<host>.<user>.log.<SEVERITY>.<sortkey>`
/// convention write one file per severity per rotation:
/// - Info: routine operation
/// - Warning: recoverable anomalies
/// - Error: failures worth paging over
/// - Fatal: last words before the process died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Routine operational logs
    Info,

    /// Recoverable anomalies
    Warning,

    /// Failures
    Error,

    /// Process-terminating failures
    Fatal,
}

impl Severity {
    /// All severities, in ascending order of importance
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Get the severity token as it appears in filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Parse a severity from its filename token
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Severity::Info),
            "WARNING" => Some(Severity::Warning),
            "ERROR" => Some(Severity::Error),
            "FATAL" => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
