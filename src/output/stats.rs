//! Run summaries for both pipelines
//!
//! Returned by the pipeline entry points and printed by the CLI.

use crate::state::StopReason;
use std::path::PathBuf;

/// Outcome of one crawl session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages in the store, seed page included
    pub pages_stored: u32,

    /// Every URL requested, in order, including one whose request failed
    pub visited_links: Vec<String>,

    /// Where the link log was written
    pub link_log: PathBuf,

    pub stop_reason: StopReason,
}

impl CrawlSummary {
    /// Returns true when the crawl reached the end of the page chain
    pub fn is_complete(&self) -> bool {
        self.stop_reason.is_complete()
    }
}

/// Outcome of one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub pages_read: usize,
    pub records: usize,
    pub report_path: PathBuf,
}

/// Prints a crawl summary to stdout
pub fn print_crawl_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary ===\n");
    println!("Pages stored: {}", summary.pages_stored);
    println!("Links visited: {}", summary.visited_links.len());
    println!("Link log: {}", summary.link_log.display());

    if summary.is_complete() {
        println!("\n✓ Reached the last page");
    } else {
        println!("\n✗ Stopped early: {}", summary.stop_reason);
        println!("  Pages stored so far are kept; rerun to start again from the seed page");
    }
}

/// Prints an extraction summary to stdout
pub fn print_extraction_summary(summary: &ExtractionSummary) {
    println!("=== Extraction Summary ===\n");
    println!("Pages read: {}", summary.pages_read);
    println!("Records extracted: {}", summary.records);
    println!("\n✓ Report written to: {}", summary.report_path.display());
}
