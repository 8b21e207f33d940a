//! Record extraction from stored listing pages
//!
//! This module turns stored pages into [`Record`]s:
//! - `query`: optional structural lookups over the parsed markup
//! - `dates`: submission/announcement date normalizers
//! - `parser`: one record per result block
//!
//! [`run_extraction`] ties them to the page store and the report renderer.

mod dates;
mod parser;
mod query;
mod record;

pub use dates::{
    month_number, parse_day_month_year, parse_month_year, DateField, FIRST_ANNOUNCEMENT,
    FIRST_SUBMISSION,
};
pub use parser::{parse_page, parse_result};
pub use record::Record;

use crate::config::ExtractorConfig;
use crate::output::{write_report, ExtractionSummary};
use crate::storage::{FsPageStore, PageStore};
use crate::HarvestError;
use std::path::PathBuf;

/// Reads every stored page with the given extension and parses its records
///
/// Pages are visited in the store's listing order and records are concatenated
/// without reordering or deduplication.
///
/// # Returns
///
/// * `Ok((pages_read, records))`
/// * `Err(HarvestError)` - A page could not be listed or read
pub fn extract_records<S: PageStore>(
    store: &S,
    extension: &str,
) -> Result<(usize, Vec<Record>), HarvestError> {
    let pages = store.list_pages(extension)?;
    tracing::info!("Extracting records from {} pages", pages.len());

    let mut records = Vec::new();
    for path in &pages {
        let html = store.read_page(path)?;
        let page_records = parse_page(&html);
        tracing::debug!("{}: {} records", path.display(), page_records.len());
        records.extend(page_records);
    }

    Ok((pages.len(), records))
}

/// Runs the extractor pipeline: stored pages → records → report file
///
/// # Example
///
/// ```no_run
/// use arxiv_harvest::config::ExtractorConfig;
/// use arxiv_harvest::extract::run_extraction;
///
/// let summary = run_extraction(&ExtractorConfig::default()).unwrap();
/// println!("{} records written", summary.records);
/// ```
pub fn run_extraction(config: &ExtractorConfig) -> Result<ExtractionSummary, HarvestError> {
    let store = FsPageStore::new(&config.input_dir);
    let (pages_read, records) = extract_records(&store, &config.file_extension)?;

    let report_path = PathBuf::from(&config.report_path);
    write_report(&records, &report_path)?;

    tracing::info!(
        "Extraction finished: {} records from {} pages written to {}",
        records.len(),
        pages_read,
        report_path.display()
    );

    Ok(ExtractionSummary {
        pages_read,
        records: records.len(),
        report_path,
    })
}
