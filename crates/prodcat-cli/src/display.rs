//! Text rendering for products, raw bodies and error bodies.

use prodcat_core::Product;

/// How much of an error body is shown to the user.
pub(crate) const ERROR_BODY_PREVIEW_CHARS: usize = 500;

/// Placeholder for an unset value.
const UNSET: &str = "-";

/// Formats a number the way `es-CR` does: non-breaking-space thousands
/// grouping (only from five integer digits up), comma decimal separator, at
/// most three fraction digits.
pub(crate) fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return UNSET.to_string();
    };

    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let fixed = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// Pretty-prints a JSON body; anything else gets a line break between
/// adjacent tags.
pub(crate) fn pretty_raw(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.replace("><", ">\n<"))
}

/// First `max_chars` characters of `body`.
pub(crate) fn truncate_body(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

/// One listing line: key, name, SKU and price.
pub(crate) fn product_line(product: &Product) -> String {
    let key = product.display_key().unwrap_or_else(|| UNSET.to_string());
    let name = product.name.as_deref().unwrap_or("(unnamed)");
    let mut line = format!("{key}\t{name}");
    if let Some(sku) = product.sku.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!("\tSKU: {sku}"));
    }
    if product.price.is_some() {
        line.push_str(&format!("\tPrice: \u{20a1} {}", format_number(product.price)));
    }
    line
}

/// Label/value rows for the detail view. Description only appears when it
/// has content.
pub(crate) fn detail_rows(product: &Product) -> Vec<(&'static str, String)> {
    let text = |v: Option<&str>| v.map_or_else(|| UNSET.to_string(), ToString::to_string);

    let price = match product.price {
        Some(_) => format!("\u{20a1} {}", format_number(product.price)),
        None => UNSET.to_string(),
    };

    let mut rows = vec![
        (
            "ID",
            product
                .id
                .as_ref()
                .map_or_else(|| UNSET.to_string(), ToString::to_string),
        ),
        ("Name", text(product.name.as_deref())),
        ("SKU", text(product.sku.as_deref())),
        ("Price", price),
        ("Stock", format_number(product.stock)),
        ("Category", text(product.category.as_deref())),
    ];
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        rows.push(("Description", description.to_string()));
    }
    rows
}
