//! Crawler module for following a paginated listing
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching with strict success classification
//! - Next-page link extraction
//! - The sequential, rate-limited crawl loop

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::extract_next_link;
