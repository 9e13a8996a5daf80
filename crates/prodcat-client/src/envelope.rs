//! Locating the payload inside the wrapper a backend put around it.
//!
//! Each shape is an entry in an ordered probe table; supporting a new backend
//! means appending an entry, never guessing.

use serde_json::Value;

use crate::xml::XmlElement;

/// Wrapper keys tried, in order, around a single record. The first key whose
/// value is present and non-null wins.
pub const RECORD_ENVELOPE_KEYS: &[&str] = &["data", "result", "item", "product", "Product"];

/// Keys tried once more inside an unwrapped detail payload, for backends that
/// answer `{"data": {"product": {...}}}`.
pub const NESTED_RECORD_KEYS: &[&str] = &["product", "Product"];

/// Paths tried, in order, for a JSON list. The first one that holds an array
/// wins.
pub const JSON_LIST_PATHS: &[&[&str]] = &[&["data"], &["data", "products"], &["items"], &["products"]];

/// Container path whose child elements are the records of an XML list.
pub const XML_LIST_CONTAINER_PATH: &[&str] = &["response", "data", "products"];

/// Tag names that mark a single record anywhere in an XML list.
pub const XML_RECORD_TAGS: &[&str] = &["product", "item"];

/// Fallback container tag for XML lists.
pub const XML_FALLBACK_CONTAINER_TAG: &str = "products";

/// Follows `path` through nested objects.
pub(crate) fn lookup_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |value, key| value.get(key))
}

fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
}

/// Unwraps a single-record envelope, returning `value` itself when none of
/// [`RECORD_ENVELOPE_KEYS`] is present.
///
/// A bare record passes through unchanged, so unwrapping is idempotent on
/// records that carry no wrapper keys.
#[must_use]
pub fn unwrap_record(value: &Value) -> &Value {
    first_present(value, RECORD_ENVELOPE_KEYS).unwrap_or(value)
}

/// [`unwrap_record`] followed by one probe of [`NESTED_RECORD_KEYS`].
#[must_use]
pub fn unwrap_detail_record(value: &Value) -> &Value {
    let payload = unwrap_record(value);
    first_present(payload, NESTED_RECORD_KEYS).unwrap_or(payload)
}

/// The records of a JSON list response, or an empty slice when no known
/// shape matches.
#[must_use]
pub fn json_list_records(root: &Value) -> &[Value] {
    JSON_LIST_PATHS
        .iter()
        .find_map(|path| lookup_path(root, path)?.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The record elements of an XML list response, in document order.
///
/// Probes, in order:
/// 1. children of `response > data > products`;
/// 2. every outermost `product` or `item` element in the document;
/// 3. children of any `products` element below the root.
///
/// A container in steps 1 and 3 whose children are all leaf fields is taken
/// as a single record rather than one empty record per field.
#[must_use]
pub fn xml_list_records(root: &XmlElement) -> Vec<&XmlElement> {
    let containers = root.find_child_path(XML_LIST_CONTAINER_PATH);
    if !containers.is_empty() {
        return child_records(&containers);
    }

    let records = root.find_outermost(&is_record_tag);
    if !records.is_empty() {
        return records;
    }

    let containers: Vec<&XmlElement> = root
        .children
        .iter()
        .flat_map(|child| child.find_outermost(&|el| el.is_named(XML_FALLBACK_CONTAINER_TAG)))
        .collect();
    child_records(&containers)
}

// A container whose children are all leaf fields is itself one record.
fn child_records<'a>(containers: &[&'a XmlElement]) -> Vec<&'a XmlElement> {
    let mut out = Vec::new();
    for container in containers {
        if is_flat_record(container) {
            out.push(*container);
        } else {
            out.extend(container.children.iter());
        }
    }
    out
}

fn is_flat_record(element: &XmlElement) -> bool {
    !element.children.is_empty()
        && element
            .children
            .iter()
            .all(|child| child.children.is_empty() && !is_record_tag(child))
}

fn is_record_tag(element: &XmlElement) -> bool {
    XML_RECORD_TAGS.iter().any(|tag| element.is_named(tag))
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
