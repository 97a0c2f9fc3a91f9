//! Logsweep Domain Layer
//!
//! This crate contains the core vocabulary for the logsweep retention
//! facility. It has zero external dependencies and defines the fundamental
//! types that the sweeper and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Severity**: the fixed token set (INFO/WARNING/ERROR/FATAL) embedded in
//!   rotated log filenames
//! - **ProcessIdentity**: the program and user names a logger stamps into its
//!   filenames; used verbatim (after escaping) to build the match pattern
//! - **ParsedLogName**: the structured result of matching one filename
//! - **LogFileRecord**: an ephemeral per-pass record of one matched file
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Filesystem interaction and pattern compilation live in logsweep-sweeper

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identity;
pub mod record;
pub mod severity;

// Re-exports for convenience
pub use identity::ProcessIdentity;
pub use record::{LogFileRecord, ParsedLogName};
pub use severity::Severity;
