use serde::Deserialize;

/// Root configuration structure, read from `.goiface.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoifaceConfig {
    /// Key receiver types by (package, name) instead of bare name
    #[serde(default)]
    pub group_by_package: bool,

    /// Fail on a repeated method name instead of listing it twice
    #[serde(default)]
    pub strict_duplicates: bool,

    /// Leave `_test.go` files out of the scan
    #[serde(default)]
    pub skip_tests: bool,

    /// Prefix for each method line inside an interface block
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,
}

impl Default for GoifaceConfig {
    fn default() -> Self {
        Self {
            group_by_package: false,
            strict_duplicates: false,
            skip_tests: false,
            indent: default_indent(),
            ignore: None,
        }
    }
}

impl GoifaceConfig {
    pub fn ignore_patterns(&self) -> &[String] {
        self.ignore
            .as_ref()
            .map(|i| i.patterns.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

pub fn default_indent() -> String {
    "    ".to_string()
}
