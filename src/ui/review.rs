//! Review step rendering

use crate::ui::forms::StepView;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the captured values, or a placeholder before submission
pub fn draw(frame: &mut Frame, area: Rect, view: &StepView) {
    let theme = view.theme;
    let label_style = Style::default()
        .fg(if view.dimmed { theme.muted() } else { theme.text() })
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(if view.dimmed {
        theme.muted()
    } else {
        theme.text()
    });

    let mut lines: Vec<Line> = match view.wizard.record() {
        Some(record) => {
            let mut lines: Vec<Line> = record
                .entries()
                .into_iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{label}: "), label_style),
                        Span::styled(value.to_string(), value_style),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "Submitted at {}",
                    record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
                ),
                Style::default().fg(theme.muted()),
            )));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No data available yet. Please complete the form.",
            value_style,
        ))],
    };

    if view.wizard.is_submitted() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Thank you for your submission.",
            Style::default().fg(theme.muted()),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
