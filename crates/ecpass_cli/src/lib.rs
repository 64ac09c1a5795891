//! ecpass command line interface
//!
//! Library half of the `ecpass` binary: configuration loading, error types,
//! password record output and the command implementations. Keeping them here
//! lets integration tests drive the commands without spawning a process.

pub mod commands;
pub mod config;
pub mod error;
pub mod record;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
