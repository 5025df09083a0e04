use super::*;
use crate::net::types::{Book, User};

fn book_resource(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "books",
        "attributes": {
            "title": title,
            "author": "F. Scott Fitzgerald",
            "genre": "Fiction",
            "isbn": "978-0-7432-7356-5",
            "total_copies": 5,
            "available_copies": 3
        }
    })
}

fn parse(value: serde_json::Value) -> Document {
    Document::parse(&value.to_string()).unwrap()
}

// =============================================================
// Cardinality
// =============================================================

#[test]
fn into_one_merges_id_into_attributes() {
    let doc = parse(serde_json::json!({
        "data": { "id": "1", "type": "users", "attributes": { "email": "test@example.com", "name": "Test User", "role": "member" } }
    }));
    let user: User = doc.into_one().unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Test User");
}

#[test]
fn into_one_rejects_collection() {
    let doc = parse(serde_json::json!({ "data": [book_resource("1", "A")] }));
    let err = doc.into_one::<Book>().unwrap_err();
    assert_eq!(err, ApiError::Contract(ContractViolation::ExpectedSingleRecord));
}

#[test]
fn into_page_wraps_single_record() {
    let doc = parse(serde_json::json!({ "data": book_resource("9", "Solo") }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "9");
    assert_eq!(page.meta.total_count, 1);
}

#[test]
fn into_page_preserves_order() {
    let doc = parse(serde_json::json!({ "data": [book_resource("2", "B"), book_resource("1", "A")] }));
    let page: Page<Book> = doc.into_page().unwrap();
    let ids: Vec<&str> = page.items.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn into_page_empty_collection() {
    let page: Page<Book> = parse(serde_json::json!({ "data": [] })).into_page().unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.meta, PaginationMeta { current_page: 1, total_pages: 1, total_count: 0, per_page: 25 });
}

#[test]
fn record_not_matching_type_is_decode_error() {
    let doc = parse(serde_json::json!({ "data": { "id": "1", "attributes": { "title": "missing fields" } } }));
    assert!(matches!(doc.into_one::<Book>(), Err(ApiError::Decode(_))));
}

#[test]
fn parse_rejects_body_without_data() {
    assert!(matches!(Document::parse(r#"{"errors":[]}"#), Err(ApiError::Decode(_))));
    assert!(matches!(Document::parse(""), Err(ApiError::Decode(_))));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn flat_meta_is_used_verbatim() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A"), book_resource("2", "B")],
        "meta": { "current_page": 2, "total_pages": 4, "total_count": 40, "per_page": 10 }
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta, PaginationMeta { current_page: 2, total_pages: 4, total_count: 40, per_page: 10 });
    assert!(page.meta.has_multiple_pages());
}

#[test]
fn nested_page_meta_is_normalized() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A")],
        "meta": { "page": { "total": 2, "totalPages": 1, "number": 1, "size": 25 } }
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta, PaginationMeta { current_page: 1, total_pages: 1, total_count: 2, per_page: 25 });
}

#[test]
fn empty_meta_takes_defaults_with_item_count() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A"), book_resource("2", "B"), book_resource("3", "C")],
        "meta": {}
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta, PaginationMeta { current_page: 1, total_pages: 1, total_count: 3, per_page: 25 });
}

#[test]
fn zero_meta_values_take_defaults() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A"), book_resource("2", "B")],
        "meta": { "page": { "number": 0, "size": 0, "totalPages": 0, "total": 0 } }
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta, PaginationMeta { current_page: 1, total_pages: 1, total_count: 2, per_page: 25 });
}

#[test]
fn zero_nested_value_falls_through_to_flat_field() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A")],
        "meta": { "per_page": 10, "page": { "size": 0 } }
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta.per_page, 10);
}

#[test]
fn partial_nested_meta_fills_gaps_with_defaults() {
    let doc = parse(serde_json::json!({
        "data": [book_resource("1", "A")],
        "meta": { "page": { "number": 3 } }
    }));
    let page: Page<Book> = doc.into_page().unwrap();
    assert_eq!(page.meta, PaginationMeta { current_page: 3, total_pages: 1, total_count: 1, per_page: 25 });
}
