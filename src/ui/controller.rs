//! Form controller: the side-effecting operations around the form reducer.
//!
//! Generate is split into [`FormController::begin_generate`] and
//! [`FormController::settle`] so a front end can run the network call on a
//! background task and keep handling events while it is in flight.
//! [`FormController::generate`] runs both halves inline.

use crate::client::{ClientError, GenerateClient};
use crate::clipboard::ClipboardSink;
use crate::protocol::{GenerateRequest, GenerateResponse};
use crate::ui::form::{ExampleLetter, FormIntent, FormReducer, FormState, Status};
use crate::ui::mvi::Reducer;

pub const STATUS_EMPTY_INPUT: &str = "Введите текст входящего письма.";
pub const STATUS_NOTHING_TO_COPY: &str = "Нет текста ответа для копирования.";
pub const STATUS_COPIED: &str = "Ответ скопирован в буфер обмена.";
pub const STATUS_COPY_FAILED: &str = "Не удалось скопировать текст. Скопируйте вручную.";
pub const STATUS_NOTHING_TO_SEND: &str = "Нет текста ответа для отправки.";
pub const STATUS_SENT: &str = "Ответ отправлен (эмуляция).";

#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Runs the reducer on the current state.
    pub fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Validates the form and enters loading.
    ///
    /// Returns the payload to send, or `None` (with an error status) when the
    /// input is blank. Callers check [`Self::is_loading`] first.
    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        let Some(request) = self.state.request_from_fields() else {
            self.dispatch(FormIntent::SetStatus(Status::error(STATUS_EMPTY_INPUT)));
            return None;
        };
        tracing::info!(
            style = %request.email_style,
            length = %request.email_length,
            chars = request.incoming_text.chars().count(),
            "submitting letter"
        );
        self.dispatch(FormIntent::Submit {
            request: request.clone(),
        });
        Some(request)
    }

    /// Regenerate re-reads the live form fields even when a previous payload
    /// exists; the stored payload is only consulted for logging.
    pub fn begin_regenerate(&mut self) -> Option<GenerateRequest> {
        if let Some(previous) = &self.state.last_request {
            tracing::debug!(
                style = %previous.email_style,
                length = %previous.email_length,
                "regenerating after previous request"
            );
        }
        self.begin_generate()
    }

    /// Leaves loading and renders the outcome.
    pub fn settle(&mut self, outcome: Result<GenerateResponse, ClientError>) {
        let outcome = outcome.map_err(|err| {
            tracing::error!(error = %err, "generate failed");
            err.user_message()
        });
        self.dispatch(FormIntent::Settled { outcome });
    }

    pub async fn generate<C: GenerateClient>(&mut self, client: &C) {
        if let Some(request) = self.begin_generate() {
            let outcome = client.generate(&request).await;
            self.settle(outcome);
        }
    }

    pub async fn regenerate<C: GenerateClient>(&mut self, client: &C) {
        if let Some(request) = self.begin_regenerate() {
            let outcome = client.generate(&request).await;
            self.settle(outcome);
        }
    }

    /// Copies the trimmed answer. Blank answers never reach the clipboard.
    pub fn copy_answer<K: ClipboardSink>(&mut self, clipboard: &mut K) {
        let text = self.state.answer.trim();
        if text.is_empty() {
            self.dispatch(FormIntent::SetStatus(Status::error(STATUS_NOTHING_TO_COPY)));
            return;
        }

        let status = match clipboard.set_text(text) {
            Ok(()) => Status::success(STATUS_COPIED),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                Status::error(STATUS_COPY_FAILED)
            }
        };
        self.dispatch(FormIntent::SetStatus(status));
    }

    /// Emulated delivery: only the status changes.
    pub fn simulate_send(&mut self) {
        let status = if self.state.answer.trim().is_empty() {
            Status::error(STATUS_NOTHING_TO_SEND)
        } else {
            Status::success(STATUS_SENT)
        };
        self.dispatch(FormIntent::SetStatus(status));
    }

    /// Loads a canned letter by identifier.
    ///
    /// Unknown identifiers leave the input untouched but still show the hint.
    pub fn load_example(&mut self, id: &str) {
        match ExampleLetter::from_id(id) {
            Some(example) => self.dispatch(FormIntent::LoadExample(example)),
            None => {
                tracing::debug!(id, "unknown example id");
                self.dispatch(FormIntent::SetStatus(Status::info(
                    crate::ui::form::STATUS_EXAMPLE_LOADED,
                )));
            }
        }
    }
}
