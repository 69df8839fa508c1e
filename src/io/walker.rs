use crate::config::GoifaceConfig;
use crate::core::{is_go_source, Error, Result};
use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the Go sources directly inside one directory.
///
/// Subdirectories are separate packages and are never entered.
pub struct FileWalker {
    root: PathBuf,
    skip_tests: bool,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            skip_tests: false,
            ignore_patterns: vec![],
        }
    }

    pub fn with_skip_tests(mut self, skip_tests: bool) -> Self {
        self.skip_tests = skip_tests;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Matching files sorted by file name
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| Error::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(Error::io(
                &self.root,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| self.walk_error(e))?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_go_source(path) {
            return false;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.skip_tests && file_name.ends_with("_test.go") {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self
            .ignore_patterns
            .iter()
            .any(|p| p.matches(&file_name) || p.matches(&path_str))
    }

    fn walk_error(&self, err: ignore::Error) -> Error {
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));
        Error::io(&self.root, source)
    }
}

/// Collect the Go files of `root` honoring the scan settings in `config`
pub fn find_go_files(root: &Path, config: &GoifaceConfig) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_skip_tests(config.skip_tests)
        .with_ignore_patterns(config.ignore_patterns())?
        .walk()
}
