//! Integration tests for both pipelines

mod crawl_tests;
mod extract_tests;
