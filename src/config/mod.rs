//! Configuration module for arxiv-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an absent file or an empty table yields the
//! stock arXiv setup.
//!
//! # Example
//!
//! ```no_run
//! use arxiv_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawl output goes to: {}", config.crawler.output_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractorConfig, DEFAULT_SITE_ORIGIN, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
