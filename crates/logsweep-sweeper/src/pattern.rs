//! Log-name pattern - matching directory entries against the naming convention

use logsweep_domain::{ParsedLogName, ProcessIdentity, Severity};
use regex::Regex;

use crate::SweepError;

/// Compiled matcher for one program's log filenames
///
/// Matches `<program>.<host>.<user>.log.<SEVERITY>.<sortkey>` where the host
/// token is any non-dot run and only the leading non-dot run after the
/// severity is captured as the sort key. A trailing `.pid` suffix is
/// therefore excluded from ordering.
///
/// Must stay consistent with how the file-creation side names its files, or
/// nothing will ever match.
///
/// # Examples
///
/// ```
/// use logsweep_domain::{ProcessIdentity, Severity};
/// use logsweep_sweeper::LogNamePattern;
///
/// let pattern = LogNamePattern::new(&ProcessIdentity::new("myserver", "alice")).unwrap();
///
/// let parsed = pattern
///     .match_name("myserver.host1.alice.log.INFO.20240101-120000.4242")
///     .unwrap();
/// assert_eq!(parsed.severity, Severity::Info);
/// assert_eq!(parsed.sort_key, "20240101-120000");
///
/// assert!(pattern.match_name("otherprog.host1.alice.log.INFO.20240101-120000").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LogNamePattern {
    re: Regex,
}

impl LogNamePattern {
    /// Compile the pattern for the given identity
    ///
    /// Program and user names are free-form strings, not patterns; any regex
    /// metacharacters in them are escaped before compilation.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Pattern`] if the composed expression fails to
    /// compile. Per the error contract this aborts the whole cleanup pass and
    /// is reported once to stderr by the caller.
    pub fn new(identity: &ProcessIdentity) -> Result<Self, SweepError> {
        let re = Regex::new(&format!(
            r"^{}\.[^.]+\.{}\.log\.(INFO|WARNING|ERROR|FATAL)\.([^.]+)",
            regex::escape(&identity.program),
            regex::escape(&identity.user),
        ))?;
        Ok(Self { re })
    }

    /// Match one filename against the convention
    ///
    /// No-match is the common case for a directory entry and is not an
    /// error; callers simply skip the entry.
    pub fn match_name(&self, name: &str) -> Option<ParsedLogName> {
        let captures = self.re.captures(name)?;

        // Both groups are guaranteed by the expression: group 1 only admits
        // the four severity tokens, group 2 is non-empty.
        let severity = Severity::parse(captures.get(1)?.as_str())?;
        let sort_key = captures.get(2)?.as_str().to_string();

        Some(ParsedLogName { severity, sort_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> LogNamePattern {
        LogNamePattern::new(&ProcessIdentity::new("myserver", "alice")).unwrap()
    }

    #[test]
    fn test_match_extracts_severity_and_sort_key() {
        let parsed = pattern()
            .match_name("myserver.web01.alice.log.WARNING.20240315-083000.991")
            .unwrap();
        assert_eq!(parsed.severity, Severity::Warning);
        assert_eq!(parsed.sort_key, "20240315-083000");
    }

    #[test]
    fn test_pid_suffix_not_part_of_sort_key() {
        let with_pid = pattern()
            .match_name("myserver.host.alice.log.INFO.20240315-083000.12345")
            .unwrap();
        let without_pid = pattern()
            .match_name("myserver.host.alice.log.INFO.20240315-083000")
            .unwrap();
        assert_eq!(with_pid.sort_key, without_pid.sort_key);
    }

    #[test]
    fn test_host_token_is_arbitrary() {
        let p = pattern();
        for host in ["web01", "db7860cc55a8", "5b867334831d", "x"] {
            let name = format!("myserver.{}.alice.log.ERROR.20240315-083000", host);
            assert!(p.match_name(&name).is_some(), "host {:?} should match", host);
        }
    }

    #[test]
    fn test_host_token_must_not_contain_dots() {
        assert!(pattern()
            .match_name("myserver.a.b.alice.log.INFO.20240315-083000")
            .is_none());
    }

    #[test]
    fn test_wrong_program_or_user_rejected() {
        let p = pattern();
        assert!(p.match_name("other.host.alice.log.INFO.20240315-083000").is_none());
        assert!(p.match_name("myserver.host.bob.log.INFO.20240315-083000").is_none());
    }

    #[test]
    fn test_unknown_severity_rejected() {
        assert!(pattern()
            .match_name("myserver.host.alice.log.DEBUG.20240315-083000")
            .is_none());
    }

    #[test]
    fn test_program_anchored_at_start() {
        assert!(pattern()
            .match_name("xmyserver.host.alice.log.INFO.20240315-083000")
            .is_none());
    }

    #[test]
    fn test_metacharacters_in_identity_matched_literally() {
        let identity = ProcessIdentity::new("my.server+v2", "a?lice");
        let p = LogNamePattern::new(&identity).unwrap();

        assert!(p
            .match_name("my.server+v2.host.a?lice.log.INFO.20240315-083000")
            .is_some());
        // The escaped dot must not act as a wildcard.
        assert!(p
            .match_name("myXserver+v2.host.a?lice.log.INFO.20240315-083000")
            .is_none());
    }
}
