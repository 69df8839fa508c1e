//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr so stdout carries only generated text.

use log::LevelFilter;

/// Map the `-v` count to a log level
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger once at startup; `RUST_LOG` overrides the `-v` level
pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if let Err(e) = result {
        eprintln!("Note: logger already configured: {}", e);
    }
}
