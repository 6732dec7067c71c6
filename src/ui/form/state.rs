//! State of the reply form.

use crate::protocol::{EmailLength, EmailStyle, ExtractedFact, GenerateRequest, GenerateResponse};
use crate::ui::mvi::UiState;

pub const CLASSIFICATION_PLACEHOLDER: &str = "Классификация появится после генерации ответа.";
pub const FACTS_PLACEHOLDER: &str = "Ключевые факты будут показаны после анализа письма.";
pub const GENERATE_LABEL: &str = "Сгенерировать ответ";
pub const GENERATE_LABEL_LOADING: &str = "Генерация…";
pub const REGENERATE_LABEL: &str = "Сгенерировать заново";

/// Severity tag of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Outcome of the last user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Loading flag guarding the generate controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// Classification region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassificationView {
    #[default]
    Placeholder,
    Badge(String),
}

impl From<Option<String>> for ClassificationView {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(label) if !label.is_empty() => Self::Badge(label),
            _ => Self::Placeholder,
        }
    }
}

/// Extracted facts region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactsView {
    #[default]
    Placeholder,
    List(Vec<ExtractedFact>),
}

impl From<Option<Vec<ExtractedFact>>> for FactsView {
    fn from(value: Option<Vec<ExtractedFact>>) -> Self {
        match value {
            Some(items) if !items.is_empty() => Self::List(items),
            _ => Self::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Incoming letter text, as typed.
    pub input: String,
    pub style: EmailStyle,
    pub length: EmailLength,
    pub load: LoadState,
    /// Payload of the last submitted request.
    pub last_request: Option<GenerateRequest>,
    pub classification: ClassificationView,
    pub facts: FactsView,
    /// Drafted reply; editable by the user.
    pub answer: String,
    pub status: Option<Status>,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn generate_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn regenerate_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn generate_label(&self) -> &'static str {
        if self.is_loading() {
            GENERATE_LABEL_LOADING
        } else {
            GENERATE_LABEL
        }
    }

    /// Builds a payload from the current fields, or `None` for blank input.
    pub fn request_from_fields(&self) -> Option<GenerateRequest> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        Some(GenerateRequest {
            incoming_text: text.to_string(),
            email_style: self.style,
            email_length: self.length,
        })
    }

    /// Renders a successful response into the three regions.
    pub(crate) fn apply_response(&mut self, response: GenerateResponse) {
        self.classification = ClassificationView::from(response.classification);
        self.facts = FactsView::from(response.extracted_info);
        self.answer = response.answer_text.unwrap_or_default();
    }
}
