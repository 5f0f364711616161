//! Layout components (header, progress, navigation, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Theme;
use crate::state::{Step, Wizard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Regions of the screen, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub progress: Rect,
    pub body: Rect,
    pub navigation: Rect,
    pub status_bar: Rect,
}

/// Progress rows: bar, step id, step name
const PROGRESS_HEIGHT: u16 = 3;

/// Split the screen into its regions
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(PROGRESS_HEIGHT), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Min(0), // Step body
            Constraint::Length(BUTTON_HEIGHT), // Navigation
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        progress: chunks[1],
        body: chunks[3],
        navigation: chunks[4],
        status_bar: chunks[5],
    }
}

/// Draw the title and the dark-mode toggle
pub fn draw_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Span::styled(
        "Multi-step form",
        Style::default()
            .fg(theme.text())
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("Ctrl+T ", Style::default().fg(theme.muted())),
        Span::styled(
            format!("[ {} ]", theme.toggle_label()),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, area);
}

/// Draw one progress cell per step
pub fn draw_progress(frame: &mut Frame, area: Rect, current: Step, theme: &Theme) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Step::ALL.iter().map(|_| Constraint::Ratio(1, Step::COUNT as u32)))
        .spacing(2)
        .split(area);

    for (step, cell) in Step::ALL.iter().zip(cells.iter()) {
        let reached = step.index() <= current.index();
        let bar_color = if reached {
            theme.accent()
        } else {
            theme.inactive()
        };
        let id_color = if reached {
            theme.accent()
        } else {
            theme.muted()
        };
        let mut name_style = Style::default().fg(theme.text());
        if *step == current {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        let lines = vec![
            Line::from(Span::styled(
                "━".repeat(cell.width as usize),
                Style::default().fg(bar_color),
            )),
            Line::from(Span::styled(step.id(), Style::default().fg(id_color))),
            Line::from(Span::styled(step.name(), name_style)),
        ];
        frame.render_widget(Paragraph::new(lines), *cell);
    }
}

/// Draw the previous/next buttons
pub fn draw_navigation(frame: &mut Frame, area: Rect, wizard: &Wizard, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Previous
            Constraint::Min(0),
            Constraint::Length(12), // Next
        ])
        .split(area);

    render_button(frame, chunks[0], "‹ Prev", wizard.can_retreat(), theme);
    render_button(frame, chunks[2], "Next ›", wizard.can_advance(), theme);
}

/// Draw the key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints: &[(&str, &str)] = &[
        ("←/→", "step"),
        ("Enter", "next"),
        ("Tab", "field"),
        ("Space", "select"),
        ("Esc", "quit"),
    ];

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(theme.muted()),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
