// Test utility module for goiface integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory holding Go source files
pub struct GoPackage {
    dir: TempDir,
}

impl GoPackage {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_file(self, name: &str, source: &str) -> Self {
        self.with_bytes(name, source.as_bytes())
    }

    pub fn with_bytes(self, name: &str, contents: &[u8]) -> Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
