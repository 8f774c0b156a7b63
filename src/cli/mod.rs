//! CLI module for cci
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)
//!
//! Command handlers live in [`crate::commands`].

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{init_logging, verbosity_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
