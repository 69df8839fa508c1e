//! Go source parsing and method extraction

pub mod extractor;
pub mod parser;

pub use extractor::{collect_interfaces, extract_directory, extract_methods, PackageLoader};
pub use parser::{new_parser, parse_source, GoAst};
