//! tb-cli library
//!
//! Argument definitions, input parsing and command dispatch for the `tb`
//! binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{Outcome, run, run_offline};
