use crate::ui::input::InputAction;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keys handled inside `handle_key` without an [`InputAction`].
const NAVIGATION_HINTS: [&str; 3] = ["F1-F3: Примеры", "Tab: Поле", "Ctrl+Q: Выход"];

/// Hint line built from the same bindings `handle_key` uses.
pub fn hints() -> String {
    let actions = InputAction::BOUND.into_iter().filter_map(|action| {
        action
            .ctrl_key()
            .map(|ch| format!("Ctrl+{}: {}", ch.to_ascii_uppercase(), action.label()))
    });
    let all: Vec<String> = actions
        .chain(NAVIGATION_HINTS.iter().map(|hint| hint.to_string()))
        .collect();
    format!(" {}", all.join(" │ "))
}

pub struct Footer {
    hints: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self { hints: hints() }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints are Cyrillic
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(self.hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(self.hints.clone(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
