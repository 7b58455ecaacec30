//! HGI Cookie Monster CLI library.
//!
//! Wires the settings file, rule and loader definitions and the baton
//! retriever into a [`cookiemonster_domain::Registry`], and exposes the
//! commands of the `hgi-cookiemonster` binary.

pub mod cli;
pub mod commands;
pub mod document;
pub mod error;
pub mod setup;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
