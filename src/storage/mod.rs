//! Storage module for persisting crawl output
//!
//! This module handles all file operations of both pipelines:
//! - Writing one markup file per crawled page
//! - Writing the newline-delimited link log
//! - Listing and reading stored pages for extraction

mod filesystem;
mod traits;

pub use filesystem::{page_filename, read_link_log, write_link_log, FsPageStore};
pub use traits::{PageStore, StorageError, StorageResult};

