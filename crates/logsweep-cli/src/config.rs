//! Configuration file handling for the CLI.

use logsweep_domain::ProcessIdentity;
use logsweep_sweeper::SweepConfig;
use serde::Deserialize;
use std::path::Path;

use crate::cli::SweepArgs;
use crate::{CliError, Result};

/// Top-level configuration file layout.
///
/// ```toml
/// [sweep]
/// budget_bytes = 67108864
/// log_dirs = ["/var/log/myapp"]
/// dry_run = false
/// sweep_interval_minutes = 15
///
/// [identity]
/// program = "myapp"
/// user = "appuser"
/// ```
///
/// Everything is optional; command-line flags override file values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Sweeper settings
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Identity overrides
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Optional identity overrides from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Program name override
    pub program: Option<String>,

    /// User name override
    pub user: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Fold command-line arguments over the file values and produce the
    /// effective sweeper inputs.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a budget is set but no log
    /// directory is configured: such an invocation can only ever be a no-op,
    /// which on the command line means a mistake.
    pub fn resolve(mut self, args: &SweepArgs) -> Result<(SweepConfig, ProcessIdentity)> {
        if args.budget.is_some() {
            self.sweep.budget_bytes = args.budget;
        }
        if !args.dirs.is_empty() {
            self.sweep.log_dirs = args.dirs.clone();
        }
        if args.dry_run {
            self.sweep.dry_run = true;
        }
        if !args.protected.is_empty() {
            self.sweep.protected = args.protected.clone();
        }

        if self.sweep.is_enabled() && self.sweep.log_dirs.is_empty() {
            return Err(CliError::Config(
                "a byte budget is set but no log directories are configured".to_string(),
            ));
        }

        let env = ProcessIdentity::from_env();
        let program = args
            .program
            .clone()
            .or(self.identity.program)
            .unwrap_or(env.program);
        let user = args.user.clone().or(self.identity.user).unwrap_or(env.user);

        Ok((self.sweep, ProcessIdentity::new(program, user)))
    }
}
