mod core;
mod loader;

pub use self::core::{default_indent, GoifaceConfig, IgnoreConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
