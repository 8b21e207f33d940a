//! Record parser for listing pages
//!
//! Each `li.arxiv-result` block becomes one [`Record`]. Every field is looked
//! up on its own; a missing block leaves that field empty and never affects
//! the other fields or the other results.

use crate::extract::dates::{FIRST_ANNOUNCEMENT, FIRST_SUBMISSION};
use crate::extract::query::{all_texts, first, first_text, text_of, text_without_links};
use crate::extract::record::Record;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:literal) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect(concat!("Failed to parse selector ", $css)));
    };
}

selector!(RESULT_SELECTOR, "li.arxiv-result");
selector!(LIST_TITLE_SELECTOR, "p.list-title");
selector!(LINK_SELECTOR, "a");
selector!(TITLE_SELECTOR, "p.title");
selector!(AUTHORS_SELECTOR, "p.authors");
selector!(INFO_SELECTOR, "p.is-size-7");
selector!(TAGS_SELECTOR, "div.tags.is-inline-block");
selector!(
    TAG_SELECTOR,
    "span.tag.is-small.is-link.tooltip.is-tooltip-top, span.tag.is-small.is-grey.tooltip.is-tooltip-top"
);
selector!(ABSTRACT_FULL_SELECTOR, r#"span[id$="-abstract-full"]"#);
selector!(ABSTRACT_SHORT_SELECTOR, r#"span[id$="-abstract-short"]"#);

/// Class of the "More"/"Less" toggle links inside abstracts
const TOGGLE_CLASS: &str = "is-size-7";

/// Parses every result block on a listing page, in document order
///
/// # Example
///
/// ```
/// use arxiv_harvest::extract::parse_page;
///
/// let html = r#"<ol><li class="arxiv-result"><p class="title"> A Title </p></li></ol>"#;
/// let records = parse_page(html);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].title.as_deref(), Some("A Title"));
/// assert_eq!(records[0].identifier, None);
/// ```
pub fn parse_page(html: &str) -> Vec<Record> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT_SELECTOR)
        .map(parse_result)
        .collect()
}

/// Parses a single result block
pub fn parse_result(result: ElementRef<'_>) -> Record {
    let (first_submission, first_announcement) = parse_dates(result);

    Record {
        identifier: parse_identifier(result),
        title: first_text(result, &TITLE_SELECTOR),
        authors: parse_authors(result),
        first_submission,
        first_announcement,
        categories: parse_categories(result),
        abstract_text: parse_abstract(result),
    }
}

fn parse_identifier(result: ElementRef<'_>) -> Option<String> {
    let list_title = first(result, &LIST_TITLE_SELECTOR)?;
    first_text(list_title, &LINK_SELECTOR)
}

fn parse_authors(result: ElementRef<'_>) -> Option<String> {
    let authors = first(result, &AUTHORS_SELECTOR)?;
    let names: Vec<String> = all_texts(authors, &LINK_SELECTOR)
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    Some(names.join(", "))
}

fn parse_dates(result: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let Some(info) = first(result, &INFO_SELECTOR) else {
        return (None, None);
    };

    let text = text_of(info);
    (
        FIRST_SUBMISSION.extract(&text),
        FIRST_ANNOUNCEMENT.extract(&text),
    )
}

/// Decorative spans with no visible label are skipped
fn parse_categories(result: ElementRef<'_>) -> Option<String> {
    let tags = first(result, &TAGS_SELECTOR)?;
    let labels: Vec<String> = all_texts(tags, &TAG_SELECTOR)
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();
    Some(labels.join(", "))
}

fn parse_abstract(result: ElementRef<'_>) -> Option<String> {
    let span = first(result, &ABSTRACT_FULL_SELECTOR)
        .or_else(|| first(result, &ABSTRACT_SHORT_SELECTOR))?;
    Some(text_without_links(span, TOGGLE_CLASS).trim().to_string())
}
