//! Error types for tile generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::style::StyleError;
use crate::words::WordMapError;

/// Errors that can occur while generating tiles
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output directory could not be created
    #[error("cannot create output directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// A tile could not be written
    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The word map was rejected
    #[error("word map error: {0}")]
    Words(#[from] WordMapError),

    /// The style could not be loaded
    #[error("style error: {0}")]
    Style(#[from] StyleError),
}

impl GenerateError {
    /// Create a directory creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Path of the filesystem operation that failed, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let err = GenerateError::write(
            "images/aktivnost.svg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("images/aktivnost.svg"));
        assert!(msg.contains("denied"));
        assert_eq!(err.path(), Some(Path::new("images/aktivnost.svg")));
    }

    #[test]
    fn test_create_dir_error_display() {
        let err = GenerateError::create_dir(
            "images",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert!(err.to_string().contains("cannot create output directory 'images'"));
    }

    #[test]
    fn test_words_error_has_no_path() {
        let err: GenerateError = WordMapError::InvalidKey {
            key: "a/b".to_string(),
        }
        .into();
        assert!(err.to_string().contains("a/b"));
        assert!(err.path().is_none());
    }
}
