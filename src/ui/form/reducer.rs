//! Reducer for the reply form.

use crate::ui::mvi::Reducer;

use super::intent::{FormIntent, TextEdit, TextField};
use super::state::{FormState, LoadState, Status};

pub const STATUS_GENERATING: &str = "Генерируем ответ…";
pub const STATUS_GENERATED: &str = "Ответ успешно сгенерирован.";
pub const STATUS_EXAMPLE_LOADED: &str = "Пример письма подставлен. Нажмите «Сгенерировать ответ».";

/// Reducer for form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, edit } => {
                let text = match field {
                    TextField::Input => &mut state.input,
                    TextField::Answer => &mut state.answer,
                };
                apply_edit(text, edit);
            }

            FormIntent::SelectStyle(style) => state.style = style,

            FormIntent::SelectLength(length) => state.length = length,

            FormIntent::LoadExample(example) => {
                state.input = example.text().to_string();
                state.status = Some(Status::info(STATUS_EXAMPLE_LOADED));
            }

            FormIntent::Submit { request } => {
                state.last_request = Some(request);
                state.load = LoadState::Loading;
                state.status = Some(Status::info(STATUS_GENERATING));
            }

            FormIntent::Settled { outcome } => {
                state.load = LoadState::Idle;
                match outcome {
                    Ok(response) => {
                        state.apply_response(response);
                        state.status = Some(Status::success(STATUS_GENERATED));
                    }
                    // Previous results stay on screen after a failure.
                    Err(message) => state.status = Some(Status::error(message)),
                }
            }

            FormIntent::SetStatus(status) => state.status = Some(status),
        }
        state
    }
}

fn apply_edit(text: &mut String, edit: TextEdit) {
    match edit {
        TextEdit::Insert(ch) => text.push(ch),
        TextEdit::InsertStr(s) => text.push_str(&s),
        TextEdit::Backspace => {
            text.pop();
        }
        TextEdit::Clear => text.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{EmailLength, EmailStyle, ExtractedFact, GenerateRequest, GenerateResponse};
    use crate::ui::form::examples::ExampleLetter;
    use crate::ui::form::state::{ClassificationView, FactsView, Severity};

    fn request() -> GenerateRequest {
        GenerateRequest {
            incoming_text: "Письмо".into(),
            email_style: EmailStyle::Business,
            email_length: EmailLength::Full,
        }
    }

    fn loading() -> FormState {
        FormReducer::reduce(FormState::default(), FormIntent::Submit { request: request() })
    }

    #[test]
    fn submit_enters_loading_and_stores_payload() {
        let state = loading();
        assert_eq!(state.load, LoadState::Loading);
        assert_eq!(state.last_request, Some(request()));
        assert_eq!(state.status, Some(Status::info(STATUS_GENERATING)));
    }

    #[test]
    fn success_renders_regions() {
        let state = FormReducer::reduce(
            loading(),
            FormIntent::Settled {
                outcome: Ok(GenerateResponse {
                    classification: Some("Официальная жалоба".into()),
                    extracted_info: Some(vec![ExtractedFact::new("Номер договора", "1")]),
                    answer_text: Some("Добрый день,".into()),
                }),
            },
        );

        assert_eq!(state.load, LoadState::Idle);
        assert_eq!(
            state.classification,
            ClassificationView::Badge("Официальная жалоба".into())
        );
        assert!(matches!(state.facts, FactsView::List(ref items) if items.len() == 1));
        assert_eq!(state.answer, "Добрый день,");
        assert_eq!(state.status.unwrap().severity, Severity::Success);
    }

    #[test]
    fn success_without_fields_renders_placeholders() {
        let mut state = loading();
        state.answer = "старый ответ".into();
        let state = FormReducer::reduce(
            state,
            FormIntent::Settled {
                outcome: Ok(GenerateResponse::default()),
            },
        );
        assert_eq!(state.classification, ClassificationView::Placeholder);
        assert_eq!(state.facts, FactsView::Placeholder);
        assert_eq!(state.answer, "");
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut state = loading();
        state.answer = "прошлый ответ".into();
        let state = FormReducer::reduce(
            state,
            FormIntent::Settled {
                outcome: Err("X".into()),
            },
        );
        assert_eq!(state.load, LoadState::Idle);
        assert_eq!(state.answer, "прошлый ответ");
        assert_eq!(state.status, Some(Status::error("X")));
    }

    #[test]
    fn example_replaces_input() {
        let state = FormState {
            input: "черновик".into(),
            ..FormState::default()
        };
        let state = FormReducer::reduce(state, FormIntent::LoadExample(ExampleLetter::Partner));
        assert_eq!(state.input, ExampleLetter::Partner.text());
        assert_eq!(state.status, Some(Status::info(STATUS_EXAMPLE_LOADED)));
    }

    #[test]
    fn edits_apply_to_the_chosen_field() {
        let mut state = FormState::default();
        for edit in [
            TextEdit::InsertStr("Прив".into()),
            TextEdit::Insert('е'),
            TextEdit::Insert('т'),
            TextEdit::Backspace,
        ] {
            state = FormReducer::reduce(
                state,
                FormIntent::Edit {
                    field: TextField::Input,
                    edit,
                },
            );
        }
        assert_eq!(state.input, "Приве");
        assert_eq!(state.answer, "");

        let state = FormReducer::reduce(
            state,
            FormIntent::Edit {
                field: TextField::Input,
                edit: TextEdit::Clear,
            },
        );
        assert!(state.input.is_empty());
    }

    #[test]
    fn selectors_update() {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::SelectStyle(EmailStyle::Formal),
        );
        let state = FormReducer::reduce(state, FormIntent::SelectLength(EmailLength::Short));
        assert_eq!(state.style, EmailStyle::Formal);
        assert_eq!(state.length, EmailLength::Short);
    }
}
