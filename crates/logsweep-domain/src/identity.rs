//! Process identity - the name pair a logger stamps into its filenames

/// Identity of the program whose log files are being managed
///
/// Both fields are matched literally against directory entries, so they must
/// stay consistent with whatever naming convention the log-file creator uses.
/// They are untrusted free-form strings; the sweeper escapes them before
/// building its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    /// Program name (typically the executable's file stem)
    pub program: String,

    /// Operating user name
    pub user: String,
}

impl ProcessIdentity {
    /// Create an identity from explicit program and user names
    pub fn new(program: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            user: user.into(),
        }
    }

    /// Derive the identity from the process environment
    ///
    /// The program name comes from the current executable's file stem and the
    /// user name from `$USER` (or `$LOGNAME`). Either falls back to
    /// `"unknown"` rather than failing; a wrong identity merely matches no
    /// files.
    pub fn from_env() -> Self {
        let program = std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(exe_stem)
            .unwrap_or_else(|| "unknown".to_string());

        let user = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "unknown".to_string());

        Self { program, user }
    }
}

fn exe_stem(exe: &std::path::Path) -> Option<String> {
    exe.file_stem().and_then(|s| s.to_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity() {
        let identity = ProcessIdentity::new("myserver", "alice");
        assert_eq!(identity.program, "myserver");
        assert_eq!(identity.user, "alice");
    }

    #[test]
    fn test_from_env_never_fails() {
        let identity = ProcessIdentity::from_env();
        assert!(!identity.program.is_empty());
        assert!(!identity.user.is_empty());
    }

    #[test]
    fn test_exe_stem() {
        assert_eq!(
            exe_stem(std::path::Path::new("/usr/bin/myserver")),
            Some("myserver".to_string())
        );
        assert_eq!(
            exe_stem(std::path::Path::new("myserver.exe")),
            Some("myserver".to_string())
        );
    }
}
