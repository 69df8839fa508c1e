use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::path::{Path, PathBuf};

use super::errors::{Error, Result};

/// Where a declaration was found, used in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// An exported method discovered on a named receiver type.
///
/// Parameter and result entries hold the verbatim source text of each type,
/// so qualifiers, pointer markers and composite syntax survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub receiver: String,
    pub params: Vec<String>,
    pub results: Vec<String>,
    pub location: SourceLocation,
}

/// Identity of a receiver type in the aggregated output.
///
/// `package` is only set when grouping by package; otherwise types sharing
/// a bare name are merged into one entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReceiverKey {
    pub package: Option<String>,
    pub name: String,
}

impl ReceiverKey {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
        }
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for ReceiverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A concrete type and its exported methods in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverType {
    pub name: String,
    pub methods: Vec<Method>,
}

impl ReceiverType {
    fn seeded(method: Method) -> Self {
        Self {
            name: method.receiver.clone(),
            methods: vec![method],
        }
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Receiver types keyed and ordered by [`ReceiverKey`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSet {
    types: BTreeMap<ReceiverKey, ReceiverType>,
}

impl InterfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `method` to the receiver identified by `key`, creating the
    /// entry on first sight.
    ///
    /// A repeated method name on the same receiver is kept as a separate
    /// entry; with `strict` it fails with [`Error::DuplicateMethod`] instead.
    pub fn add_method(
        &mut self,
        key: ReceiverKey,
        method: Method,
        strict: bool,
    ) -> Result<()> {
        match self.types.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(ReceiverType::seeded(method));
            }
            btree_map::Entry::Occupied(mut slot) => {
                if strict {
                    if let Some(existing) = slot.get().find_method(&method.name) {
                        return Err(Error::DuplicateMethod {
                            receiver: slot.key().to_string(),
                            method: method.name,
                            first: existing.location.clone(),
                            second: method.location,
                        });
                    }
                }
                slot.get_mut().methods.push(method);
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &ReceiverKey) -> Option<&ReceiverType> {
        self.types.get(key)
    }

    /// Look up a receiver by bare name, ignoring package grouping
    pub fn find(&self, name: &str) -> Option<&ReceiverType> {
        self.types.values().find(|t| t.name == name)
    }

    /// Iterate receiver types in key order
    pub fn iter(&self) -> impl Iterator<Item = (&ReceiverKey, &ReceiverType)> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn method_count(&self) -> usize {
        self.types.values().map(|t| t.methods.len()).sum()
    }
}

/// Exported per Go's naming rule: the identifier starts with an upper-case letter
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Go's directory parser picks up every file with this extension
pub fn is_go_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// 1-based line and byte column of the position just past `prefix`
pub fn line_column(prefix: &[u8]) -> (usize, usize) {
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, prefix.len() - line_start + 1)
}
