//! Crawler coordinator - the pagination crawl loop
//!
//! This module drives one crawl session:
//! - Copying the seed page into the page store
//! - Following the next-page chain one request at a time
//! - Stopping on a missing link, a non-200 answer, or a transport fault
//! - Flushing the visited-link trail to the link log

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{FetchResult, HttpFetcher, PageFetcher};
use crate::crawler::parser::extract_next_link;
use crate::output::CrawlSummary;
use crate::state::{CrawlState, StopReason};
use crate::storage::{page_filename, write_link_log, FsPageStore, PageStore};
use crate::HarvestError;
use std::path::PathBuf;
use std::time::Duration;

/// Main crawler coordinator structure
pub struct Coordinator<F, S> {
    config: CrawlerConfig,
    fetcher: F,
    store: S,
}

impl<F: PageFetcher, S: PageStore> Coordinator<F, S> {
    /// Creates a coordinator over the given fetcher and page store
    pub fn new(config: CrawlerConfig, fetcher: F, store: S) -> Self {
        Self {
            config,
            fetcher,
            store,
        }
    }

    /// Returns the page store, e.g. to inspect what a crawl wrote
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the crawl loop until it stops
    ///
    /// Reading or storing the seed page and writing the link log are the only
    /// failures returned as errors. A stop caused by the remote side or by a
    /// failed page write is reported in the returned summary; everything
    /// stored before it stays on disk.
    pub async fn run(&mut self) -> Result<CrawlSummary, HarvestError> {
        let seed = std::fs::read_to_string(&self.config.seed_page).map_err(|source| {
            HarvestError::SeedPage {
                path: self.config.seed_page.clone(),
                source,
            }
        })?;

        self.store.write_page(&page_filename(1), &seed)?;
        tracing::info!("Seed page {} stored as page 1", self.config.seed_page);

        let mut state = CrawlState::seeded(extract_next_link(&seed, &self.config.site_origin));
        let delay = Duration::from_millis(self.config.delay_ms);

        while let Some(link) = state.begin_fetch()? {
            let page_number = state.pending_page_number();
            tracing::info!("Fetching page {}: {}", page_number, link);

            match self.fetcher.fetch(&link).await {
                FetchResult::Success { body, final_url } => {
                    if final_url != link {
                        tracing::debug!("{} redirected to {}", link, final_url);
                    }

                    if let Err(e) = self.store.write_page(&page_filename(page_number), &body) {
                        tracing::error!("Failed to store page {}: {}", page_number, e);
                        state.stop(StopReason::Storage(e.to_string()))?;
                        break;
                    }

                    let next = extract_next_link(&body, &self.config.site_origin);
                    state.record_success(next)?;

                    if state.next_link().is_some() && !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }

                FetchResult::HttpError { status_code } => {
                    tracing::warn!("Request for {} failed with status {}", link, status_code);
                    state.stop(StopReason::HttpStatus(status_code))?;
                }

                FetchResult::NetworkError { error } => {
                    tracing::error!("Error while fetching {}: {}", link, error);
                    state.stop(StopReason::Transport(error))?;
                }
            }

            if state.is_stopped() {
                break;
            }
        }

        let pages_stored = state.page_number();
        let stop_reason = state
            .stop_reason()
            .cloned()
            .unwrap_or(StopReason::NoNextPage);
        let visited_links = state.into_visited();

        let link_log = PathBuf::from(&self.config.link_log);
        write_link_log(&link_log, &visited_links)?;

        tracing::info!(
            "Crawl finished ({}): {} pages stored, {} links written to {}",
            stop_reason,
            pages_stored,
            visited_links.len(),
            link_log.display()
        );

        Ok(CrawlSummary {
            pages_stored,
            visited_links,
            link_log,
            stop_reason,
        })
    }
}

/// Runs the crawl described by `config` against the live site
///
/// # Example
///
/// ```no_run
/// use arxiv_harvest::config::Config;
/// use arxiv_harvest::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_crawl(&Config::default()).await?;
/// println!("{} pages stored", summary.pages_stored);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlSummary, HarvestError> {
    let fetcher = HttpFetcher::from_config(&config.crawler)?;
    let store = FsPageStore::create(&config.crawler.output_dir)?;

    let mut coordinator = Coordinator::new(config.crawler.clone(), fetcher, store);
    coordinator.run().await
}
