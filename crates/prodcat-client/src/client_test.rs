use super::*;

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::with_base_url(base_url, "test-key", 30, "prodcat-test/0.1")
        .expect("client construction should not fail")
}

fn query(page: u32, limit: u32) -> ListQuery {
    ListQuery {
        page,
        limit,
        format: Format::Json,
    }
}

#[test]
fn list_url_has_page_then_limit() {
    let client = test_client("https://catalog.example.com");
    let url = client.list_url(&query(2, 12)).unwrap();
    assert_eq!(
        url.as_str(),
        "https://catalog.example.com/products?page=2&limit=12"
    );
}

#[test]
fn list_url_replaces_base_path() {
    let client = test_client("https://catalog.example.com/api/v1/");
    let url = client.list_url(&query(1, 5)).unwrap();
    assert_eq!(
        url.as_str(),
        "https://catalog.example.com/products?page=1&limit=5"
    );
}

#[test]
fn list_url_keeps_port() {
    let client = test_client("http://127.0.0.1:8080");
    let url = client.list_url(&query(1, 12)).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/products?page=1&limit=12");
}

#[test]
fn detail_url_appends_id() {
    let client = test_client("https://catalog.example.com");
    let url = client.detail_url("42").unwrap();
    assert_eq!(url.as_str(), "https://catalog.example.com/products/42");
}

#[test]
fn detail_url_encodes_id_as_single_segment() {
    let client = test_client("https://catalog.example.com");
    let url = client.detail_url("a/b c?d").unwrap();
    assert_eq!(
        url.as_str(),
        "https://catalog.example.com/products/a%2Fb%20c%3Fd"
    );
}

#[test]
fn detail_url_rejects_dot_segment_ids() {
    let client = test_client("https://catalog.example.com");
    for id in [".", ".."] {
        let err = client.detail_url(id).unwrap_err();
        assert!(
            matches!(err, ClientError::InvalidId { id: ref got, .. } if got == id),
            "unexpected result for {id:?}: {err:?}"
        );
    }
}

#[test]
fn detail_url_rejects_empty_id() {
    let client = test_client("https://catalog.example.com");
    assert!(matches!(
        client.detail_url(""),
        Err(ClientError::InvalidId { .. })
    ));
}

#[test]
fn detail_url_keeps_other_dotted_ids() {
    let client = test_client("https://catalog.example.com");
    let url = client.detail_url("...").unwrap();
    assert_eq!(url.as_str(), "https://catalog.example.com/products/...");
    let url = client.detail_url("v1.2").unwrap();
    assert_eq!(url.as_str(), "https://catalog.example.com/products/v1.2");
}

#[test]
fn rejects_relative_base_url() {
    let result = CatalogClient::with_base_url("catalog.example.com", "k", 30, "ua");
    assert!(
        matches!(result, Err(ClientError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn rejects_cannot_be_a_base_url() {
    let result = CatalogClient::with_base_url("mailto:ops@example.com", "k", 30, "ua");
    assert!(
        matches!(result, Err(ClientError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
