//! Field mapping from heterogeneous backend records to [`Product`].
//!
//! Each canonical field has an ordered alias list in [`FIELD_ALIASES`]. The
//! first alias present in the record with a non-null value supplies the field,
//! even when that value is `0` or `""`.

use prodcat_core::{Product, ProductId};
use serde_json::{Map, Value};

use crate::envelope::unwrap_detail_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Sku,
    Price,
    Stock,
    Category,
    Description,
}

/// Probe order for every canonical field. XML records arrive with lower-cased
/// keys, so the lower-case alias must stay in each list.
pub const FIELD_ALIASES: &[(ProductField, &[&str])] = &[
    (ProductField::Id, &["id", "productid", "_id", "Id", "ID"]),
    (ProductField::Name, &["name", "nombre", "Name", "Nombre"]),
    (ProductField::Sku, &["sku", "SKU", "Sku"]),
    (ProductField::Price, &["price", "precio", "Price", "Precio"]),
    (
        ProductField::Stock,
        &["stock", "existencias", "Stock", "Existencias"],
    ),
    (
        ProductField::Category,
        &["category", "categoria", "Category", "Categoria"],
    ),
    (
        ProductField::Description,
        &["description", "descripcion", "Description", "Descripcion"],
    ),
];

/// Aliases for `field`, in probe order.
#[must_use]
pub fn aliases(field: ProductField) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[])
}

/// The value of the first alias of `field` present in `record`.
#[must_use]
pub fn probe(record: &Map<String, Value>, field: ProductField) -> Option<&Value> {
    aliases(field)
        .iter()
        .find_map(|key| record.get(*key).filter(|v| !v.is_null()))
}

/// Maps one record into a [`Product`], keeping the record as `raw`.
///
/// A non-object record yields a product with every typed field unset.
#[must_use]
pub fn normalize_record(record: Value) -> Product {
    let (id, name, sku, price, stock, category, description) = match record.as_object() {
        Some(fields) => {
            let get = |field| probe(fields, field);
            (
                get(ProductField::Id).and_then(coerce_id),
                get(ProductField::Name).and_then(coerce_text),
                get(ProductField::Sku).and_then(coerce_text),
                get(ProductField::Price).and_then(coerce_number),
                get(ProductField::Stock).and_then(coerce_number),
                get(ProductField::Category).and_then(coerce_text),
                get(ProductField::Description).and_then(coerce_text),
            )
        }
        None => (None, None, None, None, None, None, None),
    };

    Product {
        id,
        name,
        sku,
        price,
        stock,
        category,
        description,
        raw: record,
    }
}

/// Maps every record of a list, preserving order.
#[must_use]
pub fn normalize_records(records: &[Value]) -> Vec<Product> {
    records.iter().cloned().map(normalize_record).collect()
}

/// Canonicalizes a detail payload: envelope unwrap, nested `product` probe,
/// then field mapping. `raw` is the unwrapped record.
#[must_use]
pub fn canonicalize_detail(record: &Value) -> Product {
    normalize_record(unwrap_detail_record(record).clone())
}

/// Best-effort numeric coercion. Anything that does not yield a finite
/// number, including `""`, `"abc"`, booleans and `"NaN"`, is `None`.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => coerce_number_str(s),
        _ => None,
    }
}

/// [`coerce_number`] for text, e.g. XML leaf content.
#[must_use]
pub fn coerce_number_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn coerce_id(value: &Value) -> Option<ProductId> {
    match value {
        Value::Number(n) => Some(ProductId::Number(n.clone())),
        Value::String(s) => Some(ProductId::Text(s.clone())),
        Value::Bool(b) => Some(ProductId::Text(b.to_string())),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
