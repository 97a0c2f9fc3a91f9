//! Logsweep CLI library.
//!
//! This library provides the core functionality for the logsweep
//! command-line interface: configuration loading, command dispatch, and
//! output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
