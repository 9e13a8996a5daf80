//! Client-side ordering of a fetched page.

use std::cmp::Ordering;
use std::str::FromStr;

use prodcat_core::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortField {
    Id,
    Name,
    Sku,
    Price,
    Stock,
    Category,
}

/// `field:asc` or `field:desc`; the direction defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, dir) = s.split_once(':').unwrap_or((s, "asc"));
        let field = match field.trim().to_ascii_lowercase().as_str() {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "sku" => SortField::Sku,
            "price" => SortField::Price,
            "stock" => SortField::Stock,
            "category" => SortField::Category,
            other => return Err(format!("unknown sort field \"{other}\"")),
        };
        let descending = match dir.trim().to_ascii_lowercase().as_str() {
            "asc" => false,
            "desc" => true,
            other => return Err(format!("unknown sort direction \"{other}\"")),
        };
        Ok(Self { field, descending })
    }
}

enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn as_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.to_lowercase(),
        }
    }
}

fn sort_value(product: &Product, field: SortField) -> SortValue {
    let text = |v: Option<&String>| SortValue::Text(v.cloned().unwrap_or_default());
    let number = |v: Option<f64>| v.map_or_else(|| SortValue::Text(String::new()), SortValue::Number);

    match field {
        SortField::Id => match &product.id {
            Some(ProductId::Number(n)) => n
                .as_f64()
                .map_or_else(|| SortValue::Text(n.to_string()), SortValue::Number),
            Some(ProductId::Text(s)) => SortValue::Text(s.clone()),
            None => SortValue::Text(String::new()),
        },
        SortField::Name => text(product.name.as_ref()),
        SortField::Sku => text(product.sku.as_ref()),
        SortField::Price => number(product.price),
        SortField::Stock => number(product.stock),
        SortField::Category => text(product.category.as_ref()),
    }
}

fn compare(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Stable sort. Two numbers compare numerically; any other pair compares as
/// text, with a missing value as the empty string.
pub(crate) fn sort_products(products: &mut [Product], spec: SortSpec) {
    products.sort_by(|a, b| {
        let ordering = compare(&sort_value(a, spec.field), &sort_value(b, spec.field));
        if spec.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
