//! Turns a successful response body into a [`ListResult`] or [`DetailResult`].
//!
//! Pure and synchronous: no I/O and no shared state, so it is safe to call
//! from any thread and to drop the result at any point.

use prodcat_core::{DetailResult, Format, ListResult};
use serde_json::Value;

use crate::envelope::{json_list_records, xml_list_records};
use crate::error::ClientError;
use crate::normalize::{normalize_record, normalize_records};
use crate::pagination::{json_total_pages, xml_total_pages};
use crate::parse::{parse_body, Document};
use crate::xml::flatten;

/// Decodes a list response body.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] if the body is not valid `format`.
pub fn decode_list(raw_body: String, format: Format) -> Result<ListResult, ClientError> {
    let (items, total_pages) = match parse_body(&raw_body, format)? {
        Document::Json(root) => (
            normalize_records(json_list_records(&root)),
            json_total_pages(&root),
        ),
        Document::Xml(root) => {
            let items = xml_list_records(&root)
                .into_iter()
                .map(|el| normalize_record(Value::Object(flatten(el))))
                .collect();
            (items, xml_total_pages(&root))
        }
    };

    tracing::debug!(
        %format,
        items = items.len(),
        total_pages,
        "decoded product list"
    );

    Ok(ListResult {
        items,
        total_pages,
        raw_body,
    })
}

/// Decodes a detail response body into its generic record.
///
/// JSON bodies are returned as parsed. For XML the root element is flattened;
/// a root without child elements gives an empty record.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] if the body is not valid `format`.
pub fn decode_detail(raw_body: String, format: Format) -> Result<DetailResult, ClientError> {
    let record = match parse_body(&raw_body, format)? {
        Document::Json(value) => value,
        Document::Xml(root) => Value::Object(flatten(&root)),
    };
    Ok(DetailResult { record, raw_body })
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
