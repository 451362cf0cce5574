use std::sync::Arc;

use lapstore_core::{AppConfig, MemorySession};

use super::*;

fn client_for(base_url: &str) -> StorefrontClient {
    StorefrontClient::with_base_url(
        base_url,
        5,
        "lapstore-test/0.1",
        Arc::new(MemorySession::default()),
    )
    .unwrap()
}

#[test]
fn new_normalizes_configured_backend_url() {
    let config = AppConfig {
        backend_url: "http://localhost:8000/".to_owned(),
        ..AppConfig::local()
    };
    let client = StorefrontClient::new(&config, Arc::new(MemorySession::default())).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[test]
fn url_appends_path_and_query_verbatim() {
    let client = client_for("https://shop.vn/api/");
    assert_eq!(
        client.url("/laptops/filter?cpu=core+i7&vga=intel+arc a370m"),
        "https://shop.vn/api/laptops/filter?cpu=core+i7&vga=intel+arc a370m"
    );
}

#[test]
fn with_base_url_rejects_invalid_origin() {
    let result = StorefrontClient::with_base_url(
        "not-a-url",
        5,
        "lapstore-test/0.1",
        Arc::new(MemorySession::default()),
    );
    let err = result.err().unwrap();
    assert!(
        matches!(err, ClientError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn authorize_requires_token() {
    let client = client_for("http://localhost:8000");
    let err = client
        .authorize(client.client.get("http://localhost:8000/accounts/profile"))
        .err()
        .unwrap();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[test]
fn authorize_attaches_bearer_token() {
    let client = StorefrontClient::with_base_url(
        "http://localhost:8000",
        5,
        "lapstore-test/0.1",
        Arc::new(MemorySession::with_token("tok-123")),
    )
    .unwrap();
    let request = client
        .authorize(client.client.get("http://localhost:8000/accounts/profile"))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
        "Bearer tok-123"
    );
}
