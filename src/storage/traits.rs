//! Storage traits and error types
//!
//! This module defines the trait interface for page stores and
//! associated error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for page store implementations
///
/// The crawl loop only ever writes whole pages; the extractor only lists and
/// reads them. Writes replace any existing file of the same name.
pub trait PageStore {
    /// Writes `body` as the page named `name`, returning the path written
    fn write_page(&mut self, name: &str, body: &str) -> StorageResult<PathBuf>;

    /// Lists stored pages whose extension equals `extension`, sorted by file name
    fn list_pages(&self, extension: &str) -> StorageResult<Vec<PathBuf>>;

    /// Reads a stored page
    fn read_page(&self, path: &Path) -> StorageResult<String>;
}
