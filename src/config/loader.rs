use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::GoifaceConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".goiface.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<GoifaceConfig, String> {
    toml::from_str::<GoifaceConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Every failure is fatal.
pub fn load_config_from(path: &Path) -> Result<GoifaceConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents).map_err(|msg| Error::config(path, msg))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<GoifaceConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // NotFound only means no config at this level
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.goiface.toml`, falling back to
/// defaults when none is usable.
pub fn discover_config(start: &Path) -> GoifaceConfig {
    let start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            GoifaceConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, GoifaceConfig::default());
        assert_eq!(config.indent, "    ");
        assert!(config.ignore_patterns().is_empty());
    }

    #[test]
    fn test_parse_config_full() {
        let config = parse_config(
            r#"
group_by_package = true
strict_duplicates = true
skip_tests = true
indent = "\t"

[ignore]
patterns = ["*_gen.go"]
"#,
        )
        .unwrap();
        assert!(config.group_by_package);
        assert!(config.strict_duplicates);
        assert!(config.skip_tests);
        assert_eq!(config.indent, "\t");
        assert_eq!(config.ignore_patterns(), ["*_gen.go".to_string()]);
    }

    #[test]
    fn test_parse_config_rejects_bad_types() {
        let err = parse_config("skip_tests = \"yes\"").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_directory_ancestors_limits_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("pkg");
        fs::create_dir(&nested).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "skip_tests = true\n").unwrap();

        let config = discover_config(&nested);
        assert!(config.skip_tests);
    }

    #[test]
    fn test_discover_config_invalid_falls_back() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = discover_config(root.path());
        assert_eq!(config, GoifaceConfig::default());
    }

    #[test]
    fn test_load_config_from_missing_is_error() {
        let root = TempDir::new().unwrap();
        let err = load_config_from(&root.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_config_from_invalid_is_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("bad.toml");
        fs::write(&path, "indent = 4").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
