//! Where capture files come from.
//!
//! The session store only depends on this trait: it asks for the capture root
//! and for the bytes at a path below it. The filesystem implementation is the
//! default; tests and embedders can supply their own.

use std::io;
use std::path::{Path, PathBuf};

/// Root resolution and raw reads for capture files.
pub trait CaptureSource {
    /// Directory under which `charles/ios/` lives.
    fn root_dir(&self) -> io::Result<PathBuf>;

    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Filesystem source rooted at a fixed directory or at the working directory.
#[derive(Debug, Clone, Default)]
pub struct FsCaptureSource {
    root: Option<PathBuf>,
}

impl FsCaptureSource {
    /// Source rooted at the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl CaptureSource for FsCaptureSource {
    fn root_dir(&self) -> io::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
