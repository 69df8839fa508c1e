//! CLI module for goiface
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::Cli;
pub use commands::{generate_text, handle_generate_command, resolve_config};
pub use setup::{init_logging, level_for_verbosity};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
