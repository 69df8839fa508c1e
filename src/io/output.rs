use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where generated text ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or(Self::Stdout)
    }

    /// Write `text` verbatim
    pub fn write(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdout => write_to(io::stdout().lock(), text),
            Self::File(path) => write_file(path, text),
        }
    }
}

pub fn write_to<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

fn write_file(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}
