//! Logsweep Sweeper
//!
//! Disk-space-bounded retention for rotated log files.
//!
//! # Overview
//!
//! The sweeper is responsible for:
//! - **Indexing**: matching directory entries against the program's
//!   log-naming convention and extracting each file's sort key and size
//! - **Enforcement**: deleting files oldest-first until a directory's total
//!   falls at or under the configured byte budget
//! - **Metrics collection**: tracking deletions and failures for monitoring
//!
//! # Filename convention
//!
//! A file belongs to the program when its name matches
//! `<program>.<host>.<user>.log.<SEVERITY>.<sortkey>[.<pid>]` where the host
//! token is an arbitrary non-dot string and `SEVERITY` is one of
//! INFO/WARNING/ERROR/FATAL. The host token is ignored for ordering: on
//! container platforms the same logical program writes files under many
//! auto-generated hostnames, and eviction order must not depend on which
//! hostname sorts lower.
//!
//! # Usage
//!
//! ## One-time sweep
//!
//! ```no_run
//! use logsweep_domain::ProcessIdentity;
//! use logsweep_sweeper::{SweepConfig, Sweeper};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SweepConfig::new(Some(64 * 1024 * 1024), vec!["/var/log/myapp".into()]);
//! let mut sweeper = Sweeper::new(config, ProcessIdentity::from_env())?;
//!
//! let metrics = sweeper.sweep();
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background worker
//!
//! ```no_run
//! use logsweep_domain::ProcessIdentity;
//! use logsweep_sweeper::{SweepConfig, SweepWorker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SweepConfig::new(Some(64 * 1024 * 1024), vec!["/var/log/myapp".into()]);
//!     let mut worker = SweepWorker::new(config, ProcessIdentity::from_env())?;
//!
//!     // Run until Ctrl+C
//!     worker.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The sweeper can be configured via TOML:
//!
//! ```toml
//! [sweep]
//! budget_bytes = 67108864
//! log_dirs = ["/var/log/myapp", "/tmp"]
//! dry_run = false
//! protected = ["/var/log/myapp/current.INFO"]
//! sweep_interval_minutes = 15
//! ```
//!
//! Leaving `budget_bytes` unset disables the facility entirely: no directory
//! is even listed.
//!
//! # Failure model
//!
//! The sweeper is best-effort and never fatal to the host process. An
//! unreadable directory is skipped whole; a failed delete is reported and the
//! pass continues. Failure diagnostics go directly to stderr rather than
//! through the logging facility, which may be the very thing being swept.

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod pattern;
mod sweeper;
mod worker;

pub use config::SweepConfig;
pub use error::SweepError;
pub use metrics::SweepMetrics;
pub use pattern::LogNamePattern;
pub use sweeper::Sweeper;
pub use worker::SweepWorker;
