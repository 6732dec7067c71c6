use crate::ui::app::{App, Focus};
use crate::ui::form::{ExampleLetter, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action the runtime performs after a key event.
///
/// Everything that touches the network or the clipboard is returned instead of
/// handled here, so key mapping stays free of side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    Generate,
    Regenerate,
    Copy,
    Send,
}

impl InputAction {
    /// Actions bound to a Ctrl shortcut, in footer order.
    pub const BOUND: [InputAction; 4] = [
        InputAction::Generate,
        InputAction::Regenerate,
        InputAction::Copy,
        InputAction::Send,
    ];

    /// Letter pressed together with Ctrl.
    pub fn ctrl_key(self) -> Option<char> {
        match self {
            InputAction::None => None,
            InputAction::Generate => Some('g'),
            InputAction::Regenerate => Some('r'),
            InputAction::Copy => Some('y'),
            InputAction::Send => Some('s'),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputAction::None => "",
            InputAction::Generate => "Сгенерировать",
            InputAction::Regenerate => "Заново",
            InputAction::Copy => "Копировать",
            InputAction::Send => "Отправить",
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }
    if let Some(action) = InputAction::BOUND
        .into_iter()
        .find(|action| action.ctrl_key().is_some_and(|ch| is_ctrl_char(key, ch)))
    {
        return action;
    }
    if is_ctrl_char(key, 'u') {
        app.edit_focused(TextEdit::Clear);
        return InputAction::None;
    }

    match key.code {
        KeyCode::F(n) => {
            let example = match n {
                1 => Some(ExampleLetter::Complaint),
                2 => Some(ExampleLetter::Regulator),
                3 => Some(ExampleLetter::Partner),
                _ => None,
            };
            if let Some(example) = example {
                app.controller_mut().load_example(example.id());
            }
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left => app.cycle_selector(false),
        KeyCode::Right => app.cycle_selector(true),
        KeyCode::Enter => match app.focus() {
            Focus::Input | Focus::Answer => app.edit_focused(TextEdit::Insert('\n')),
            Focus::Style | Focus::Length => return InputAction::Generate,
        },
        KeyCode::Backspace => app.edit_focused(TextEdit::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_focused(TextEdit::Insert(ch));
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
