//! Filesystem-backed page store

use crate::storage::traits::{PageStore, StorageError, StorageResult};
use std::path::{Path, PathBuf};

/// Returns the file name for the page with the given number
///
/// Numbers are zero-padded so that file-name order equals crawl order.
pub fn page_filename(page_number: u32) -> String {
    format!("page_{:04}.html", page_number)
}

/// Page store writing one file per page into a single directory
#[derive(Debug, Clone)]
pub struct FsPageStore {
    dir: PathBuf,
}

impl FsPageStore {
    /// Opens a store over an existing directory without touching the filesystem
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens a store, creating the directory and its parents if needed
    pub fn create(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PageStore for FsPageStore {
    fn write_page(&mut self, name: &str, body: &str) -> StorageResult<PathBuf> {
        let path = self.dir.join(name);
        std::fs::write(&path, body).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Stored {} ({} bytes)", path.display(), body.len());
        Ok(path)
    }

    fn list_pages(&self, extension: &str) -> StorageResult<Vec<PathBuf>> {
        let list_err = |source| StorageError::List {
            path: self.dir.clone(),
            source,
        };

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
                pages.push(path);
            }
        }

        pages.sort();
        Ok(pages)
    }

    fn read_page(&self, path: &Path) -> StorageResult<String> {
        std::fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Writes the visited-link trail, one URL per line
pub fn write_link_log(path: &Path, links: &[String]) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut content = String::new();
    for link in links {
        content.push_str(link);
        content.push('\n');
    }

    std::fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a link log back into its URLs
pub fn read_link_log(path: &Path) -> StorageResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
