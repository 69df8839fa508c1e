pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    is_exported, is_go_source, line_column, InterfaceSet, Method, ReceiverKey, ReceiverType, SourceLocation,
};
