//! Output module for reports and run summaries
//!
//! This module handles:
//! - Rendering extracted records as a Markdown report
//! - Summaries of crawl and extraction runs

mod markdown;
pub mod stats;
mod traits;

pub use markdown::{render_record, render_report, write_report};
pub use stats::{print_crawl_summary, print_extraction_summary, CrawlSummary, ExtractionSummary};
pub use traits::{OutputError, OutputResult};
