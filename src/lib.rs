// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod extraction;
pub mod generation;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Error, InterfaceSet, Method, ReceiverKey, ReceiverType, Result, SourceLocation,
};

pub use crate::config::GoifaceConfig;

pub use crate::extraction::extract_directory;

pub use crate::generation::{generate_interfaces, render_signature, InterfaceGenerator};
