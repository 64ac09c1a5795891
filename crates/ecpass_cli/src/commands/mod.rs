//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! user-facing output to the writer they are given and log to stderr.

pub mod generate;
pub mod inspect;
pub mod noise;
