//! Form controller against a mock generate endpoint.

mod common;

use common::controller_with_input;
use common::mock_backend::{MockBackend, MockResponse};
use replydraft::client::{GenerateClient, HttpGenerateClient, GENERIC_FAILURE, GENERIC_REJECTION};
use replydraft::protocol::{EmailLength, EmailStyle, ExtractedFact};
use replydraft::ui::controller::{FormController, STATUS_EMPTY_INPUT};
use replydraft::ui::form::{
    ClassificationView, ExampleLetter, FactsView, FormIntent, Severity, Status,
    GENERATE_LABEL, GENERATE_LABEL_LOADING, STATUS_GENERATED,
};

async fn mock_with(response: MockResponse) -> (MockBackend, HttpGenerateClient) {
    let mock = MockBackend::start().await;
    mock.enqueue_response(response).await;
    let client = HttpGenerateClient::new(mock.url("/api/generate"));
    (mock, client)
}

#[tokio::test]
async fn generate_sends_one_request_with_current_fields() {
    let (mock, client) = mock_with(MockResponse::json(
        r#"{"classification":"Жалоба","extractedInfo":[{"label":"Договор","value":"123"}],"answerText":"Ответ"}"#,
    ))
    .await;

    let mut controller = controller_with_input("  Претензия по договору №123  ");
    controller.dispatch(FormIntent::SelectStyle(EmailStyle::Formal));
    controller.dispatch(FormIntent::SelectLength(EmailLength::Short));
    controller.generate(&client).await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/generate");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/json")
    );
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "incomingText": "Претензия по договору №123",
            "emailStyle": "formal",
            "emailLength": "short"
        })
    );

    let state = controller.state();
    assert_eq!(state.classification, ClassificationView::Badge("Жалоба".into()));
    assert_eq!(
        state.facts,
        FactsView::List(vec![ExtractedFact::new("Договор", "123")])
    );
    assert_eq!(state.answer, "Ответ");
    assert_eq!(state.status, Some(Status::success(STATUS_GENERATED)));
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn blank_input_sends_nothing() {
    let (mock, client) = mock_with(MockResponse::default()).await;

    let mut controller = controller_with_input(" \n\t ");
    controller.generate(&client).await;
    controller.regenerate(&client).await;

    assert!(mock.captured_requests().await.is_empty());
    assert_eq!(
        controller.state().status,
        Some(Status::error(STATUS_EMPTY_INPUT))
    );
}

#[tokio::test]
async fn missing_fields_render_placeholders() {
    let (_mock, client) = mock_with(MockResponse::json(
        r#"{"extractedInfo":[],"answerText":"Ответ"}"#,
    ))
    .await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;

    let state = controller.state();
    assert_eq!(state.classification, ClassificationView::Placeholder);
    assert_eq!(state.facts, FactsView::Placeholder);
    assert_eq!(state.answer, "Ответ");
}

#[tokio::test]
async fn error_message_from_server_is_shown_verbatim() {
    let (_mock, client) = mock_with(MockResponse::error(400, "Пустой текст письма.")).await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;

    assert_eq!(
        controller.state().status,
        Some(Status::error("Пустой текст письма."))
    );
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn unparseable_error_body_uses_fallback() {
    let (mock, client) = mock_with(MockResponse::raw(502, "text/html", "<h1>Bad Gateway</h1>")).await;
    mock.enqueue_response(MockResponse::raw(500, "application/json", ""))
        .await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;
    assert_eq!(
        controller.state().status,
        Some(Status::error(GENERIC_REJECTION))
    );

    controller.generate(&client).await;
    assert_eq!(
        controller.state().status,
        Some(Status::error(GENERIC_REJECTION))
    );
}

#[tokio::test]
async fn failed_call_keeps_previous_results() {
    let (mock, client) = mock_with(MockResponse::json(
        r#"{"classification":"Запрос","answerText":"Первый ответ"}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::error(500, "Сбой")).await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;
    controller.regenerate(&client).await;

    let state = controller.state();
    assert_eq!(state.answer, "Первый ответ");
    assert_eq!(state.classification, ClassificationView::Badge("Запрос".into()));
    assert_eq!(state.status, Some(Status::error("Сбой")));
}

#[tokio::test]
async fn invalid_success_body_is_a_failure() {
    let (_mock, client) = mock_with(MockResponse::raw(200, "text/plain", "not json")).await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;

    assert_eq!(
        controller.state().status,
        Some(Status::error(GENERIC_FAILURE))
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_a_failure() {
    // Bind and drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = HttpGenerateClient::new(format!("http://127.0.0.1:{}/api/generate", port));

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;

    let status = controller.state().status.clone().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.message, GENERIC_FAILURE);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn loading_disables_controls_until_settled() {
    let (_mock, client) = mock_with(MockResponse::json(r#"{"answerText":"Ответ"}"#)).await;

    let mut controller = controller_with_input("Письмо");
    let request = controller.begin_generate().unwrap();
    assert!(controller.is_loading());
    assert!(!controller.state().generate_enabled());
    assert!(!controller.state().regenerate_enabled());
    assert_eq!(controller.state().generate_label(), GENERATE_LABEL_LOADING);

    let outcome = client.generate(&request).await;
    controller.settle(outcome);

    assert!(!controller.is_loading());
    assert!(controller.state().generate_enabled());
    assert!(controller.state().regenerate_enabled());
    assert_eq!(controller.state().generate_label(), GENERATE_LABEL);
}

#[tokio::test]
async fn loading_example_makes_no_request() {
    let (mock, _client) = mock_with(MockResponse::default()).await;

    let mut controller = FormController::new();
    controller.load_example("regulator");

    assert_eq!(controller.state().input, ExampleLetter::Regulator.text());
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn regenerate_resubmits_live_fields() {
    let (mock, client) = mock_with(MockResponse::json(r#"{"answerText":"1"}"#)).await;
    mock.enqueue_response(MockResponse::json(r#"{"answerText":"2"}"#))
        .await;

    let mut controller = controller_with_input("Письмо");
    controller.generate(&client).await;
    controller.dispatch(FormIntent::SelectStyle(EmailStyle::Client));
    controller.regenerate(&client).await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].json()["emailStyle"], "client");
    assert_eq!(controller.state().answer, "2");
}
