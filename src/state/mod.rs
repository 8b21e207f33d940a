//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: where the crawl loop is in its seeded/fetching/continue/stopped cycle
//! - `StopReason`: why a crawl reached its terminal phase
//! - `CrawlState`: page counter, pending next link, and visited-link trail threaded through the loop

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlPhase, CrawlState, StopReason};
