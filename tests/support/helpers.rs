// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{DummyClock, InMemoryMessageRepo, InMemoryPostRepo, KeywordScorer};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use weebapi::application::commands::posts::DEFAULT_SLUG_MAX_ATTEMPTS;
use weebapi::application::ports::{sentiment::SentimentScorer, time::Clock, util::SlugGenerator};
use weebapi::application::services::ApplicationServices;
use weebapi::domain::message::MessageRepository;
use weebapi::domain::post::{PostReadRepository, PostWriteRepository};
use weebapi::infrastructure::util::DefaultSlugGenerator;
use weebapi::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};

/// Everything a test may want to poke at after exercising the services.
pub struct TestContext {
    pub posts: Arc<InMemoryPostRepo>,
    pub messages: Arc<InMemoryMessageRepo>,
    pub scorer: Arc<KeywordScorer>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_services_with(
    posts: Arc<InMemoryPostRepo>,
    clock: Arc<dyn Clock>,
    slug_max_attempts: u32,
) -> TestContext {
    let messages = Arc::new(InMemoryMessageRepo::new());
    let scorer = Arc::new(KeywordScorer::new());

    let post_write: Arc<dyn PostWriteRepository> = posts.clone();
    let post_read: Arc<dyn PostReadRepository> = posts.clone();
    let message_repo: Arc<dyn MessageRepository> = messages.clone();
    let scorer_port: Arc<dyn SentimentScorer> = scorer.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        post_write,
        post_read,
        message_repo,
        scorer_port,
        clock,
        slugger,
        slug_max_attempts,
    ));

    TestContext {
        posts,
        messages,
        scorer,
        services,
    }
}

pub fn build_services() -> TestContext {
    build_services_with(
        Arc::new(InMemoryPostRepo::new()),
        Arc::new(DummyClock),
        DEFAULT_SLUG_MAX_ATTEMPTS,
    )
}

pub fn router_for(context: &TestContext) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&context.services),
    };
    build_router_with_rate_limiter(state, false)
}

pub fn make_test_router() -> axum::Router {
    router_for(&build_services())
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("valid json body")
    };
    (status, json)
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status
/// and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let (_, json) = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
