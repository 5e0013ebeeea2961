//! One extraction strategy per detail page template. All strategies share
//! the same shape: locate a small fixed set of marked regions, map each
//! region's text into one field of the canonical record, and fall back to
//! the field's sentinel when a marker is missing.

pub mod brand;
pub mod normal;

use crate::models::NOT_AVAILABLE;
use scraper::{ElementRef, Html, Selector};

pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn find_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(text_of)
}

pub(crate) fn na() -> String {
    NOT_AVAILABLE.to_string()
}
