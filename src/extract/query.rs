//! Structural lookups over a parsed listing page
//!
//! Every lookup answers `None` when the block it looks for is missing, so
//! callers can treat absence as an ordinary outcome.

use scraper::node::Node;
use scraper::{ElementRef, Selector};

/// First descendant of `scope` matching `selector`
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Concatenated text of an element, untrimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Trimmed text of the first descendant matching `selector`
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first(scope, selector).map(|element| text_of(element).trim().to_string())
}

/// Texts of every descendant matching `selector`, in document order
pub fn all_texts(scope: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    scope.select(selector).map(text_of).collect()
}

/// Text of an element with every `<a>` carrying `class` left out
///
/// Used to drop inline toggle links ("More", "Less") from a text block.
pub fn text_without_links(element: ElementRef<'_>, class: &str) -> String {
    let mut out = String::new();
    collect_text(element, class, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, skip_class: &str, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if el.name() == "a" && el.classes().any(|c| c == skip_class) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, skip_class, out);
                }
            }
            _ => {}
        }
    }
}
