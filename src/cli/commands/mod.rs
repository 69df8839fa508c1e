//! Command handlers for the CLI

mod generate;

pub use generate::{generate_text, handle_generate_command, resolve_config};
