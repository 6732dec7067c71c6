//! Intents for the reply form.

use crate::protocol::{EmailLength, EmailStyle, GenerateRequest, GenerateResponse};
use crate::ui::mvi::Intent;

use super::examples::ExampleLetter;
use super::state::Status;

/// Editable text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Input,
    Answer,
}

/// A single edit applied at the end of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    InsertStr(String),
    Backspace,
    Clear,
}

/// Intents that can be dispatched to the form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Edit the input or answer text.
    Edit { field: TextField, edit: TextEdit },

    SelectStyle(EmailStyle),

    SelectLength(EmailLength),

    /// Replace the input with a canned letter.
    LoadExample(ExampleLetter),

    /// A request was sent; enter loading and remember the payload.
    Submit { request: GenerateRequest },

    /// The request settled. `Err` carries the status text.
    Settled {
        outcome: Result<GenerateResponse, String>,
    },

    SetStatus(Status),
}

impl Intent for FormIntent {}
