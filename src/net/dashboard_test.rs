use super::*;

fn librarian_payload() -> serde_json::Value {
    serde_json::json!({
        "total_books": 100,
        "total_borrowed_books": 25,
        "books_due_today": 5,
        "members_with_overdue": [
            { "id": 1, "name": "John Doe", "email": "john@example.com", "overdue_count": 2 },
            { "id": 2, "name": "Jane Smith", "email": "jane@example.com", "overdue_count": 1 }
        ],
        "pagination": { "current_page": 1, "total_pages": 1, "total_count": 2, "per_page": 10 }
    })
}

fn member_payload() -> serde_json::Value {
    serde_json::json!({
        "borrowed_books": [{
            "id": 1,
            "book": { "id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald" },
            "borrowed_at": "2024-01-01T00:00:00Z",
            "due_date": "2024-01-20T00:00:00Z",
            "days_until_due": 5,
            "is_overdue": false,
            "days_overdue": 0
        }],
        "overdue_books": [],
        "summary": { "total_borrowed": 1, "total_overdue": 0 },
        "pagination": { "current_page": 1, "total_pages": 1, "total_count": 1, "per_page": 20 }
    })
}

#[test]
fn librarian_shape_decodes_to_librarian_variant() {
    let data = DashboardData::from_value(librarian_payload()).unwrap();
    assert_eq!(data.role(), Role::Librarian);
    let DashboardData::Librarian(dashboard) = data else {
        panic!("expected librarian dashboard");
    };
    assert_eq!(dashboard.total_books, 100);
    assert_eq!(dashboard.members_with_overdue.len(), 2);
    assert_eq!(dashboard.pagination.per_page, 10);
}

#[test]
fn member_shape_decodes_to_member_variant() {
    let data = DashboardData::from_value(member_payload()).unwrap();
    assert_eq!(data.role(), Role::Member);
    let DashboardData::Member(dashboard) = data else {
        panic!("expected member dashboard");
    };
    assert_eq!(dashboard.borrowed_books[0].book.title, "The Great Gatsby");
    assert_eq!(dashboard.summary, MemberSummary { total_borrowed: 1, total_overdue: 0 });
    assert_eq!(dashboard.pagination.per_page, 20);
}

#[test]
fn payload_with_both_shapes_is_ambiguous() {
    let mut value = member_payload();
    let extra = librarian_payload();
    let fields = value.as_object_mut().unwrap();
    for (k, v) in extra.as_object().unwrap() {
        fields.insert(k.clone(), v.clone());
    }
    assert_eq!(
        DashboardData::from_value(value),
        Err(ApiError::Contract(ContractViolation::AmbiguousDashboardShape))
    );
}

#[test]
fn payload_with_neither_shape_is_unknown() {
    assert_eq!(
        DashboardData::from_value(serde_json::json!({ "hello": "world" })),
        Err(ApiError::Contract(ContractViolation::UnknownDashboardShape))
    );
    assert_eq!(
        DashboardData::from_value(serde_json::json!([1, 2])),
        Err(ApiError::Contract(ContractViolation::UnknownDashboardShape))
    );
}

#[test]
fn half_librarian_shape_is_unknown() {
    assert_eq!(
        DashboardData::from_value(serde_json::json!({ "total_books": 3 })),
        Err(ApiError::Contract(ContractViolation::UnknownDashboardShape))
    );
}

#[test]
fn malformed_member_shape_is_decode_error() {
    let value = serde_json::json!({ "borrowed_books": "nope", "summary": {} });
    assert!(matches!(DashboardData::from_value(value), Err(ApiError::Decode(_))));
}

#[test]
fn missing_pagination_defaults() {
    let mut value = member_payload();
    value.as_object_mut().unwrap().remove("pagination");
    let data = DashboardData::from_value(value).unwrap();
    assert_eq!(data.pagination(), PaginationMeta::default());
}
