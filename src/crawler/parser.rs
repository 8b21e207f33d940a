//! Next-page link extraction
//!
//! Listing pages carry a single `a.pagination-next` control pointing at the
//! following page. Its href is site-relative and, in saved pages, sometimes
//! still carries `amp;` fragments left over from double-escaped `&amp;amp;`.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static NEXT_PAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.pagination-next").expect("Failed to parse next-page selector")
});

/// Extracts the absolute URL of the next listing page
///
/// Returns `None` when the page has no next-page control or the control has no
/// target; that is the normal end of the page chain. The result is not
/// validated as a URL.
///
/// # Example
///
/// ```
/// use arxiv_harvest::crawler::extract_next_link;
///
/// let html = r#"<nav><a class="pagination-next" href="/search/?query=x&amp;amp;start=50">Next</a></nav>"#;
/// assert_eq!(
///     extract_next_link(html, "https://arxiv.org"),
///     Some("https://arxiv.org/search/?query=x&start=50".to_string())
/// );
/// ```
pub fn extract_next_link(html: &str, site_origin: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let href = document
        .select(&NEXT_PAGE_SELECTOR)
        .next()?
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())?;

    Some(format!("{}{}", site_origin, href.replace("amp;", "")))
}
