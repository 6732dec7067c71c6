use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::{
    ClassificationView, FactsView, FormState, Severity, CLASSIFICATION_PLACEHOLDER,
    FACTS_PLACEHOLDER, REGENERATE_LABEL,
};
use crate::ui::theme::{
    ACCENT, BADGE_BG, GLOBAL_BORDER, MUTED, STATUS_ERROR, STATUS_INFO, STATUS_OK, TEXT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CURSOR: char = '▏';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.controller().state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(4),
        ])
        .split(columns[1]);

    draw_selectors(frame, left[0], app);
    draw_text_field(
        frame,
        left[1],
        " Входящее письмо ",
        &state.input,
        app.focus() == Focus::Input,
    );
    draw_action_buttons(frame, left[2], state);
    draw_classification(frame, right[0], &state.classification);
    draw_facts(frame, right[1], &state.facts);
    draw_text_field(
        frame,
        right[2],
        " Ответ ",
        &state.answer,
        app.focus() == Focus::Answer,
    );
    draw_status(frame, rows[1], state);
    frame.render_widget(Footer::new().widget(rows[2]), rows[2]);
}

fn block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn selector_span(label: &'static str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Span::styled(format!("◀ {} ▶", label), style)
}

fn draw_selectors(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.controller().state();
    let line = Line::from(vec![
        Span::styled(" Стиль: ", Style::default().fg(MUTED)),
        selector_span(state.style.label(), app.focus() == Focus::Style),
        Span::styled("   Длина: ", Style::default().fg(MUTED)),
        selector_span(state.length.label(), app.focus() == Focus::Length),
    ]);
    let focused = matches!(app.focus(), Focus::Style | Focus::Length);
    frame.render_widget(
        Paragraph::new(line).block(block(" Параметры ", focused)),
        area,
    );
}

/// Renders text with a cursor marker, scrolled so the end stays visible.
fn draw_text_field(frame: &mut Frame<'_>, area: Rect, title: &'static str, text: &str, focused: bool) {
    let mut content = text.to_string();
    if focused {
        content.push(CURSOR);
    }
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = wrapped_height(&content, inner_width).saturating_sub(inner_height);

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(TEXT))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(block(title, focused));
    frame.render_widget(paragraph, area);
}

/// Rough row count after wrapping; exact for text without wide glyphs.
fn wrapped_height(text: &str, width: usize) -> usize {
    text.split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum()
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    }
}

/// Generate and regenerate share one row and dim together while loading.
fn draw_action_buttons(frame: &mut Frame<'_>, area: Rect, state: &FormState) {
    let line = Line::from(vec![
        Span::styled(
            format!(" [ {} ]", state.generate_label()),
            button_style(state.generate_enabled()),
        ),
        Span::styled(" Ctrl+G   ", Style::default().fg(MUTED)),
        Span::styled(
            format!("[ {} ]", REGENERATE_LABEL),
            button_style(state.regenerate_enabled()),
        ),
        Span::styled(" Ctrl+R", Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block("", false)), area);
}

fn draw_classification(frame: &mut Frame<'_>, area: Rect, view: &ClassificationView) {
    let line = match view {
        ClassificationView::Placeholder => Line::from(Span::styled(
            CLASSIFICATION_PLACEHOLDER,
            Style::default().fg(MUTED),
        )),
        ClassificationView::Badge(label) => Line::from(Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(TEXT)
                .bg(BADGE_BG)
                .add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(
        Paragraph::new(line).block(block(" Классификация ", false)),
        area,
    );
}

fn draw_facts(frame: &mut Frame<'_>, area: Rect, view: &FactsView) {
    let lines: Vec<Line<'_>> = match view {
        FactsView::Placeholder => vec![Line::from(Span::styled(
            FACTS_PLACEHOLDER,
            Style::default().fg(MUTED),
        ))],
        FactsView::List(facts) => facts
            .iter()
            .map(|fact| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", fact.label),
                        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(fact.value.as_str(), Style::default().fg(TEXT)),
                ])
            })
            .collect(),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block(" Ключевые факты ", false)),
        area,
    );
}

fn severity_color(severity: Severity) -> ratatui::style::Color {
    match severity {
        Severity::Info => STATUS_INFO,
        Severity::Success => STATUS_OK,
        Severity::Error => STATUS_ERROR,
    }
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, state: &FormState) {
    let line = match &state.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.message),
            Style::default().fg(severity_color(status.severity)),
        )),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line).block(block(" Статус ", false)), area);
}
