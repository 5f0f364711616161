//! Button component for TUI

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; disabled buttons are drawn muted
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_enabled: bool, theme: &Theme) {
    let border_style = if is_enabled {
        Style::default().fg(theme.accent())
    } else {
        Style::default().fg(theme.inactive())
    };

    let text_style = if is_enabled {
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted())
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
