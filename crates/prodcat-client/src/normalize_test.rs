use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// alias probing
// -----------------------------------------------------------------------

#[test]
fn every_field_has_aliases() {
    for field in [
        ProductField::Id,
        ProductField::Name,
        ProductField::Sku,
        ProductField::Price,
        ProductField::Stock,
        ProductField::Category,
        ProductField::Description,
    ] {
        assert!(!aliases(field).is_empty(), "no aliases for {field:?}");
    }
}

#[test]
fn english_lowercase_fields_map_directly() {
    let p = normalize_record(json!({
        "id": "p-1",
        "name": "Café",
        "sku": "CAF-01",
        "price": 1500.5,
        "stock": 12,
        "category": "Bebidas",
        "description": "Tostado oscuro"
    }));
    assert_eq!(p.id, Some(ProductId::from("p-1")));
    assert_eq!(p.name.as_deref(), Some("Café"));
    assert_eq!(p.sku.as_deref(), Some("CAF-01"));
    assert_eq!(p.price, Some(1500.5));
    assert_eq!(p.stock, Some(12.0));
    assert_eq!(p.category.as_deref(), Some("Bebidas"));
    assert_eq!(p.description.as_deref(), Some("Tostado oscuro"));
}

#[test]
fn spanish_and_capitalized_aliases_map() {
    let p = normalize_record(json!({
        "ID": 9,
        "Nombre": "Té",
        "Sku": "TE-9",
        "Precio": "800",
        "Existencias": "3",
        "Categoria": "Bebidas",
        "Descripcion": "Verde"
    }));
    assert_eq!(p.id, Some(ProductId::from(9)));
    assert_eq!(p.name.as_deref(), Some("Té"));
    assert_eq!(p.sku.as_deref(), Some("TE-9"));
    assert_eq!(p.price, Some(800.0));
    assert_eq!(p.stock, Some(3.0));
    assert_eq!(p.category.as_deref(), Some("Bebidas"));
    assert_eq!(p.description.as_deref(), Some("Verde"));
}

#[test]
fn earlier_alias_wins_when_both_present() {
    let p = normalize_record(json!({
        "Nombre": "late",
        "name": "early",
        "_id": "underscore",
        "productid": "pid",
        "Precio": 2,
        "precio": 1
    }));
    assert_eq!(p.name.as_deref(), Some("early"));
    assert_eq!(p.id, Some(ProductId::from("pid")));
    assert_eq!(p.price, Some(1.0));
}

#[test]
fn present_zero_is_not_skipped() {
    let p = normalize_record(json!({"price": 0, "Price": 99, "stock": 0, "id": 0, "ID": 5}));
    assert_eq!(p.price, Some(0.0));
    assert_eq!(p.stock, Some(0.0));
    assert_eq!(p.id, Some(ProductId::from(0)));
}

#[test]
fn present_empty_string_is_not_skipped() {
    let p = normalize_record(json!({"name": "", "Name": "fallback", "sku": "", "SKU": "X"}));
    assert_eq!(p.name.as_deref(), Some(""));
    assert_eq!(p.sku.as_deref(), Some(""));
}

#[test]
fn null_value_counts_as_absent() {
    let p = normalize_record(json!({"name": null, "nombre": "Café", "price": null}));
    assert_eq!(p.name.as_deref(), Some("Café"));
    assert_eq!(p.price, None);
}

#[test]
fn present_but_uncoercible_price_does_not_fall_through() {
    let p = normalize_record(json!({"price": "abc", "precio": 10}));
    assert_eq!(p.price, None);
}

#[test]
fn unrecognised_keys_leave_fields_unset() {
    let p = normalize_record(json!({"title": "X", "cost": 5, "NAME": "upper"}));
    assert_eq!(p.name, None);
    assert_eq!(p.price, None);
    assert_eq!(p.id, None);
}

#[test]
fn scalar_text_fields_are_stringified() {
    let p = normalize_record(json!({"sku": 12345, "name": true}));
    assert_eq!(p.sku.as_deref(), Some("12345"));
    assert_eq!(p.name.as_deref(), Some("true"));
}

#[test]
fn structured_text_fields_are_unset() {
    let p = normalize_record(json!({"name": {"es": "Café"}, "category": ["a", "b"]}));
    assert_eq!(p.name, None);
    assert_eq!(p.category, None);
}

#[test]
fn raw_is_the_source_record() {
    let record = json!({"Id": 1, "extra": {"nested": true}});
    let p = normalize_record(record.clone());
    assert_eq!(p.raw, record);
}

#[test]
fn non_object_record_has_no_typed_fields() {
    let p = normalize_record(json!("just text"));
    assert_eq!(p.id, None);
    assert_eq!(p.name, None);
    assert_eq!(p.raw, json!("just text"));
}

#[test]
fn normalize_records_preserves_order() {
    let products = normalize_records(&[json!({"id": 2}), json!({"id": 1})]);
    let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![Some(ProductId::from(2)), Some(ProductId::from(1))]);
}

// -----------------------------------------------------------------------
// numeric coercion
// -----------------------------------------------------------------------

#[test]
fn coerce_number_accepts_numbers_and_numeric_strings() {
    assert_eq!(coerce_number(&json!(3)), Some(3.0));
    assert_eq!(coerce_number(&json!(-2.5)), Some(-2.5));
    assert_eq!(coerce_number(&json!("1500.5")), Some(1500.5));
    assert_eq!(coerce_number(&json!("  42 ")), Some(42.0));
    assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
}

#[test]
fn coerce_number_rejects_everything_else() {
    for value in [
        json!("abc"),
        json!(""),
        json!("   "),
        json!("NaN"),
        json!("inf"),
        json!("-Infinity"),
        json!("1,5"),
        json!(true),
        json!(null),
        json!([1]),
        json!({"v": 1}),
    ] {
        assert_eq!(coerce_number(&value), None, "{value} should be unset");
    }
}

#[test]
fn coerce_number_rejects_overflowing_literal() {
    assert_eq!(coerce_number_str("1e400"), None);
}

// -----------------------------------------------------------------------
// canonicalize_detail
// -----------------------------------------------------------------------

#[test]
fn canonicalize_detail_unwraps_data_envelope() {
    let p = canonicalize_detail(&json!({"data": {"id": 4, "nombre": "Pan"}}));
    assert_eq!(p.id, Some(ProductId::from(4)));
    assert_eq!(p.name.as_deref(), Some("Pan"));
    assert_eq!(p.raw, json!({"id": 4, "nombre": "Pan"}));
}

#[test]
fn canonicalize_detail_unwraps_nested_product() {
    let p = canonicalize_detail(&json!({"result": {"Product": {"Name": "Queso", "Stock": "7"}}}));
    assert_eq!(p.name.as_deref(), Some("Queso"));
    assert_eq!(p.stock, Some(7.0));
}

#[test]
fn canonicalize_detail_bare_record() {
    let record = json!({"id": "x", "price": "10"});
    let p = canonicalize_detail(&record);
    assert_eq!(p.id, Some(ProductId::from("x")));
    assert_eq!(p.price, Some(10.0));
    assert_eq!(p.raw, record);
}
