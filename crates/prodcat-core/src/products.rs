use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier as the backend sent it.
///
/// Backends disagree on whether ids are numeric or textual, so both are kept
/// verbatim instead of forcing one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value.into())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_owned())
    }
}

/// A catalog product in canonical form, independent of the wire format and
/// envelope shape it arrived in.
///
/// Every typed field is derived from `raw`; a field is `None` when no
/// recognised alias was present in the source record or when its value could
/// not be coerced. Numeric fields are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// The source record the typed fields were read from, kept for "view raw".
    pub raw: serde_json::Value,
}

impl Product {
    /// Key used to refer to this product from a listing: the id, else the
    /// SKU, else the name.
    #[must_use]
    pub fn display_key(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .or_else(|| self.sku.clone())
            .or_else(|| self.name.clone())
    }
}

/// One page of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult {
    pub items: Vec<Product>,
    /// Total page count reported by the backend; always at least 1.
    pub total_pages: u32,
    /// Response body exactly as received.
    pub raw_body: String,
}

/// A single product response before canonicalization.
///
/// `record` is the parsed JSON document, or the flattened XML root. Turning it
/// into a [`Product`] is left to the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailResult {
    pub record: serde_json::Value,
    pub raw_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_product() -> Product {
        Product {
            id: None,
            name: None,
            sku: None,
            price: None,
            stock: None,
            category: None,
            description: None,
            raw: serde_json::Value::Null,
        }
    }

    #[test]
    fn product_id_displays_without_quotes() {
        assert_eq!(ProductId::from(42).to_string(), "42");
        assert_eq!(ProductId::from("abc-1").to_string(), "abc-1");
    }

    #[test]
    fn product_id_serializes_untagged() {
        let json = serde_json::to_string(&ProductId::from(7)).unwrap();
        assert_eq!(json, "7");
        let json = serde_json::to_string(&ProductId::from("x")).unwrap();
        assert_eq!(json, "\"x\"");
    }

    #[test]
    fn display_key_prefers_id_then_sku_then_name() {
        let mut p = empty_product();
        assert_eq!(p.display_key(), None);

        p.name = Some("Café".to_owned());
        assert_eq!(p.display_key().as_deref(), Some("Café"));

        p.sku = Some("CAF-01".to_owned());
        assert_eq!(p.display_key().as_deref(), Some("CAF-01"));

        p.id = Some(ProductId::from(3));
        assert_eq!(p.display_key().as_deref(), Some("3"));
    }
}
