//! Total page count extraction.
//!
//! Backends report the page count under different names, or not at all. The
//! count is always at least 1; missing, non-numeric and non-positive values
//! all fall back to [`DEFAULT_TOTAL_PAGES`].
//!
//! ## JSON probe order
//!
//! ```text
//! data.totalPages, totalPages, total_pages, pages
//! ```
//!
//! ## XML
//!
//! The first element in document order named `totalpages` or `pages`, tag
//! names compared case-insensitively.

use serde_json::Value;

use crate::envelope::lookup_path;
use crate::normalize::{coerce_number, coerce_number_str};
use crate::xml::XmlElement;

pub const DEFAULT_TOTAL_PAGES: u32 = 1;

pub const JSON_TOTAL_PAGES_PATHS: &[&[&str]] = &[
    &["data", "totalPages"],
    &["totalPages"],
    &["total_pages"],
    &["pages"],
];

pub const XML_TOTAL_PAGES_TAGS: &[&str] = &["totalpages", "pages"];

/// Page count from a parsed JSON body. The first path holding a non-null
/// value decides; a later path is not consulted if that value is unusable.
#[must_use]
pub fn json_total_pages(root: &Value) -> u32 {
    JSON_TOTAL_PAGES_PATHS
        .iter()
        .find_map(|path| lookup_path(root, path).filter(|v| !v.is_null()))
        .map_or(DEFAULT_TOTAL_PAGES, |v| page_count(coerce_number(v)))
}

/// Page count from an XML document root.
#[must_use]
pub fn xml_total_pages(root: &XmlElement) -> u32 {
    root.find_first(&|el| XML_TOTAL_PAGES_TAGS.iter().any(|tag| el.is_named(tag)))
        .map_or(DEFAULT_TOTAL_PAGES, |el| {
            page_count(coerce_number_str(&el.text_content()))
        })
}

/// Truncates a coerced count toward zero and clamps it to `1..=u32::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn page_count(value: Option<f64>) -> u32 {
    match value.map(f64::trunc) {
        Some(n) if n >= f64::from(u32::MAX) => u32::MAX,
        // Range checked above; the cast is exact for integral values in range.
        Some(n) if n >= 1.0 => n as u32,
        _ => DEFAULT_TOTAL_PAGES,
    }
}
