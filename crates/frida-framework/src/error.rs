//! Error types for framework assembly.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while assembling a framework or writing a module-map.
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// I/O error while touching `path`.
    #[error("I/O error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required source file or private asset does not exist.
    #[error("Missing required file: {}", .0.display())]
    MissingFile(PathBuf),

    /// The bundle root exists but is not a directory.
    #[error("Bundle root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A path has no usable file name component.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl FrameworkError {
    /// Wrap an I/O error together with the path it happened on.
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path this error is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::MissingFile(path) | Self::NotADirectory(path) | Self::InvalidPath(path) => path,
        }
    }
}
