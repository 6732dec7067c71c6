//! `POST /api/generate` and `GET /health` through the axum router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::mock_backend::{MockBackend, MockResponse};
use http_body_util::BodyExt;
use replydraft::config::BackendConfig;
use replydraft::draft::{LABEL_CONTRACT, LABEL_DEADLINE, LABEL_ORGANIZATION, SIGNATURE_PLACEHOLDER};
use replydraft::protocol::{ExtractedFact, GenerateResponse};
use replydraft::server::router::{build_router, AppState};
use replydraft::server::upstream::ProcessingBackend;
use replydraft::ui::form::ExampleLetter;
use serde_json::{json, Value};
use tower::ServiceExt;

fn offline_router() -> Router {
    build_router(AppState::new(None))
}

fn router_with_backend(url: String) -> Router {
    router_with_backend_timeout(url, 2)
}

fn router_with_backend_timeout(url: String, timeout_seconds: u32) -> Router {
    let config = BackendConfig {
        url,
        timeout_seconds,
        ..BackendConfig::default()
    };
    let backend = ProcessingBackend::from_config(&config).unwrap();
    build_router(AppState::new(Some(backend)))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn generate_body(text: &str, style: &str, length: &str) -> String {
    json!({ "incomingText": text, "emailStyle": style, "emailLength": length }).to_string()
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let (status, body) = post_json(offline_router(), &generate_body("  \n ", "business", "full")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Пустой текст письма." }));
}

#[tokio::test]
async fn missing_text_is_rejected() {
    let (status, body) = post_json(offline_router(), "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Пустой текст письма.");
}

#[tokio::test]
async fn malformed_json_is_rejected_with_error_body() {
    let (status, body) = post_json(offline_router(), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn complaint_is_drafted_locally() {
    let body = generate_body(ExampleLetter::Complaint.text(), "formal", "full");
    let (status, body) = post_json(offline_router(), &body).await;
    assert_eq!(status, StatusCode::OK);

    let response: GenerateResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.classification.as_deref(), Some("Официальная жалоба"));

    let facts = response.extracted_info.unwrap();
    assert_eq!(facts[0], ExtractedFact::new(LABEL_CONTRACT, "123/45"));
    assert_eq!(facts[1], ExtractedFact::new(LABEL_DEADLINE, "30.11.2025"));
    assert_eq!(
        facts[2],
        ExtractedFact::new(LABEL_ORGANIZATION, "ООО «Пример-Банк»")
    );

    let answer = response.answer_text.unwrap();
    assert!(answer.ends_with(SIGNATURE_PLACEHOLDER));
}

#[tokio::test]
async fn each_sample_gets_its_category() {
    let cases = [
        (ExampleLetter::Complaint, "Официальная жалоба"),
        (ExampleLetter::Regulator, "Регуляторный запрос"),
        (ExampleLetter::Partner, "Партнёрское предложение"),
    ];
    for (example, expected) in cases {
        let body = generate_body(example.text(), "business", "short");
        let (status, body) = post_json(offline_router(), &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classification"], expected, "{:?}", example);
    }
}

#[tokio::test]
async fn backend_response_is_mapped() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"classification":"Жалоба","extracted_info":{"amount":"15000"},"response":"Уважаемый клиент"}"#,
    ))
    .await;

    let body = generate_body("Жалоба на списание", "client", "short");
    let (status, body) = post_json(router_with_backend(mock.url("/process")), &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "classification": "Жалоба",
            "extractedInfo": [{ "label": "amount", "value": "15000" }],
            "answerText": "Уважаемый клиент"
        })
    );

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].json(),
        json!({ "text": "Жалоба на списание", "tone": "дружелюбный", "length": "short" })
    );
}

#[tokio::test]
async fn backend_failure_falls_back_to_local_draft() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let body = generate_body(ExampleLetter::Partner.text(), "business", "full");
    let (status, body) = post_json(router_with_backend(mock.url("/process")), &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"], "Партнёрское предложение");
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn slow_backend_times_out_and_falls_back() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(
        MockResponse::json(r#"{"classification":"Поздно","response":"Поздно"}"#).with_delay(3000),
    )
    .await;

    let body = generate_body(ExampleLetter::Complaint.text(), "business", "full");
    let started = std::time::Instant::now();
    let (status, body) =
        post_json(router_with_backend_timeout(mock.url("/process"), 1), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"], "Официальная жалоба");
    assert!(started.elapsed() < std::time::Duration::from_millis(2500));
}

#[tokio::test]
async fn null_style_is_read_as_default() {
    let body = json!({ "incomingText": ExampleLetter::Partner.text(), "emailStyle": null }).to_string();
    let (status, body) = post_json(offline_router(), &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["answerText"].as_str().is_some_and(|a| a.starts_with("Добрый день,")));
}

#[tokio::test]
async fn incomplete_backend_reply_falls_back() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"classification":"Жалоба"}"#))
        .await;

    let body = generate_body("Просим оплатить счёт", "business", "full");
    let (status, body) = post_json(router_with_backend(mock.url("/process")), &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"], "Запрос по оплате/счету");
}

#[tokio::test]
async fn health_reports_service() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "replydraft");
    assert_eq!(body["backend_enabled"], false);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Not found" }));
}
