//! Field rendering utilities for forms

use crate::state::{Checkbox, FormField};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: bordered input plus its message line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its inline validation message
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    dimmed: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let value_color = if dimmed { theme.muted() } else { theme.text() };
    let border_color = if is_active {
        theme.accent()
    } else if field.error.is_some() {
        theme.error()
    } else {
        theme.inactive()
    };

    let display_value = field.display_value();
    let (display_str, value_style) = if display_value.is_empty() && !is_active {
        ("(empty)".to_string(), Style::default().fg(theme.muted()))
    } else {
        (display_value, Style::default().fg(value_color))
    };

    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, value_style),
        Span::styled(cursor, Style::default().fg(theme.accent())),
    ]));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(if is_active { theme.accent() } else { value_color }),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = &field.error {
        let error = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(theme.error()),
        ));
        frame.render_widget(error, chunks[1]);
    }
}

/// Draw a checkbox line
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    checkbox: &Checkbox,
    is_active: bool,
    dimmed: bool,
    theme: &Theme,
) {
    let mark = if checkbox.checked { "[x]" } else { "[ ]" };
    let mark_style = if is_active {
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted())
    };
    let label_color = if dimmed { theme.muted() } else { theme.text() };

    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(checkbox.label, Style::default().fg(label_color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
