//! Terminal front-end state: the form controller plus focus and quit flags.

use crate::protocol::EmailLength;
use crate::ui::controller::FormController;
use crate::ui::form::{FormIntent, TextEdit, TextField};

/// Focusable form regions, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Style,
    Length,
    Answer,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Style,
            Self::Style => Self::Length,
            Self::Length => Self::Answer,
            Self::Answer => Self::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::Answer,
            Self::Style => Self::Input,
            Self::Length => Self::Style,
            Self::Answer => Self::Length,
        }
    }

    /// Text field behind this region, if it is editable.
    pub fn text_field(self) -> Option<TextField> {
        match self {
            Self::Input => Some(TextField::Input),
            Self::Answer => Some(TextField::Answer),
            Self::Style | Self::Length => None,
        }
    }
}

#[derive(Default)]
pub struct App {
    controller: FormController,
    focus: Focus,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an edit to the focused text field. Selectors ignore edits.
    pub fn edit_focused(&mut self, edit: TextEdit) {
        if let Some(field) = self.focus.text_field() {
            self.controller.dispatch(FormIntent::Edit { field, edit });
        }
    }

    /// Bracketed paste goes to the focused text field, newlines included.
    pub fn on_paste(&mut self, text: String) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.edit_focused(TextEdit::InsertStr(text));
    }

    /// Left/Right on a selector. `forward` is Right.
    pub fn cycle_selector(&mut self, forward: bool) {
        let state = self.controller.state();
        match self.focus {
            Focus::Style => {
                let style = if forward {
                    state.style.next()
                } else {
                    state.style.prev()
                };
                self.controller.dispatch(FormIntent::SelectStyle(style));
            }
            Focus::Length => {
                let length: EmailLength = state.length.toggle();
                self.controller.dispatch(FormIntent::SelectLength(length));
            }
            Focus::Input | Focus::Answer => {}
        }
    }
}
