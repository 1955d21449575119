//! Router-level tests: the handlers wired behind the request-ID and
//! fallback layers, driven through `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

use url_api::config::Config;
use url_api::routes::create_router;
use url_api::state::AppContext;
use url_api::storage::{MemoryUrlStore, StorageError, UrlStore};

const ALIAS: &str = "test-alias";

/// Fails every call with a backend error and counts the calls.
#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl UrlStore for FailingStore {
    async fn save_url(&self, _url: &str, _alias: &str) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend("some internal error".to_string()))
    }

    async fn get_url(&self, _alias: &str) -> Result<String, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend("some internal error".to_string()))
    }

    async fn delete_url(&self, _alias: &str) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend("some internal error".to_string()))
    }
}

async fn send(store: Arc<dyn UrlStore>, method: Method, uri: &str) -> Response {
    let app = create_router(AppContext::with_store(Config::default(), store));

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn delete_existing_alias() {
    let store = Arc::new(MemoryUrlStore::new());
    store.save_url("https://example.com", ALIAS).await.unwrap();

    let response = send(store.clone(), Method::DELETE, "/test-alias").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#""url by alias: test-alias deleted""#
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn delete_unknown_alias() {
    let store = Arc::new(MemoryUrlStore::new());

    let response = send(store, Method::DELETE, "/test-alias").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "not found", "status": "Error" })
    );
}

#[tokio::test]
async fn delete_with_failing_store() {
    let store = Arc::new(FailingStore::default());

    let response = send(store.clone(), Method::DELETE, "/test-alias").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains("some internal error"));
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "error": "internal error", "status": "Error" })
    );
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_empty_alias_is_not_routed() {
    let store = Arc::new(FailingStore::default());

    let response = send(store.clone(), Method::DELETE, "/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let store = Arc::new(MemoryUrlStore::new());

    let response = send(store, Method::DELETE, "/test-alias").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn save_then_redirect() {
    let store = Arc::new(MemoryUrlStore::new());
    let app = create_router(AppContext::with_store(
        Config::default(),
        store.clone(),
    ));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/url")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "url": "https://example.com", "alias": ALIAS })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "Ok", "alias": ALIAS })
    );
    assert_eq!(store.len().await, 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/test-alias")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn health_is_not_an_alias() {
    let store = Arc::new(FailingStore::default());

    let response = send(store.clone(), Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "UP" }));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

async fn save(store: Arc<MemoryUrlStore>, body: Value) -> Response {
    let app = create_router(AppContext::with_store(Config::default(), store));

    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/url")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn save_refuses_aliases_shadowed_by_routes() {
    for alias in ["health", "url", "a/b"] {
        let store = Arc::new(MemoryUrlStore::new());

        let response = save(
            store.clone(),
            json!({ "url": "https://example.com", "alias": alias }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "Error", "error": "invalid alias" })
        );
        assert!(store.is_empty().await, "alias {alias} was stored");
    }
}

#[tokio::test]
async fn saved_alias_can_be_deleted() {
    let store = Arc::new(MemoryUrlStore::new());

    let response =
        save(store.clone(), json!({ "url": "https://example.com" })).await;
    let body = body_json(response).await;
    let alias = body["alias"].as_str().unwrap().to_string();

    let response =
        send(store.clone(), Method::DELETE, &format!("/{alias}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        format!(r#""url by alias: {alias} deleted""#)
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn undecodable_alias_answers_envelope() {
    for method in [Method::DELETE, Method::GET] {
        let store = Arc::new(FailingStore::default());

        let response = send(store.clone(), method, "/%FF").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "Error", "error": "invalid request" })
        );
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }
}
