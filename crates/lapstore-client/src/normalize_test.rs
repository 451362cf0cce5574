use super::*;
use serde_json::json;

fn locator() -> ImageLocator {
    ImageLocator::new("http://localhost:8000", "/placeholder.png")
}

fn raw(images: Option<serde_json::Value>) -> RawProduct {
    RawProduct {
        id: 42,
        name: "Asus Zenbook 14 OLED".to_owned(),
        product_images: images,
        quantity: Some(3),
        rate: Some(4.5),
        num_rate: Some(12),
        original_price: Some(25_990_000),
        sale_price: Some(22_990_000),
    }
}

// -----------------------------------------------------------------------
// ProductImages::resolve
// -----------------------------------------------------------------------

#[test]
fn resolve_decodes_json_encoded_string() {
    let value = json!("[\"/static/a.jpg\", \"/static/b.jpg\"]");
    assert_eq!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Paths(vec!["/static/a.jpg".to_owned(), "/static/b.jpg".to_owned()])
    );
}

#[test]
fn resolve_accepts_array() {
    let value = json!(["/static/a.jpg"]);
    assert_eq!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Paths(vec!["/static/a.jpg".to_owned()])
    );
}

#[test]
fn resolve_null_and_absent_are_missing() {
    assert_eq!(ProductImages::resolve(None), ProductImages::Missing);
    assert_eq!(
        ProductImages::resolve(Some(&serde_json::Value::Null)),
        ProductImages::Missing
    );
}

#[test]
fn resolve_empty_string_is_empty_list() {
    let value = json!("");
    assert_eq!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Paths(Vec::new())
    );
}

#[test]
fn resolve_garbage_string_is_malformed() {
    let value = json!("not json at all");
    assert!(matches!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Malformed(_)
    ));
}

#[test]
fn resolve_encoded_object_is_malformed() {
    let value = json!("{\"url\": \"/a.jpg\"}");
    assert!(matches!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Malformed(_)
    ));
}

#[test]
fn resolve_number_is_malformed() {
    let value = json!(17);
    assert!(matches!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Malformed(_)
    ));
}

#[test]
fn resolve_non_string_entries_are_malformed() {
    let value = json!(["/a.jpg", 3]);
    assert!(matches!(
        ProductImages::resolve(Some(&value)),
        ProductImages::Malformed(_)
    ));
}

// -----------------------------------------------------------------------
// transform_product
// -----------------------------------------------------------------------

#[test]
fn transform_prefixes_backend_origin() {
    let record = transform_product(raw(Some(json!("[\"/static/a.jpg\"]"))), &locator());
    assert_eq!(record.img_source, "http://localhost:8000/static/a.jpg");
}

#[test]
fn transform_uses_placeholder_without_images() {
    for images in [None, Some(json!([])), Some(json!("garbage")), Some(json!([""]))] {
        let record = transform_product(raw(images), &locator());
        assert_eq!(record.img_source, "/placeholder.png");
    }
}

#[test]
fn transform_joins_relative_path_with_slash() {
    let record = transform_product(raw(Some(json!(["static/a.jpg"]))), &locator());
    assert_eq!(record.img_source, "http://localhost:8000/static/a.jpg");
}

#[test]
fn transform_uppercases_name_and_passes_numbers_through() {
    let record = transform_product(raw(None), &locator());
    assert_eq!(record.product_id, 42);
    assert_eq!(record.product_name, "ASUS ZENBOOK 14 OLED");
    assert_eq!(record.rate, Some(4.5));
    assert_eq!(record.num_rate, Some(12));
    assert_eq!(record.original_price, Some(25_990_000));
    assert_eq!(record.sale_price, Some(22_990_000));
    assert!(record.in_stock);
}

#[test]
fn transform_stock_requires_positive_quantity() {
    let mut product = raw(None);
    product.quantity = Some(0);
    assert!(!transform_product(product.clone(), &locator()).in_stock);
    product.quantity = None;
    assert!(!transform_product(product, &locator()).in_stock);
}

#[test]
fn transform_products_preserves_order() {
    let mut second = raw(None);
    second.id = 7;
    let records = transform_products(vec![raw(None), second], &locator());
    let ids: Vec<i64> = records.iter().map(|r| r.product_id).collect();
    assert_eq!(ids, vec![42, 7]);
}
