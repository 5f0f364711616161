//! Step body rendering
//!
//! - `field_renderer`: input and checkbox widgets
//! - `step_forms`: layouts of the data-entry steps
//!
//! The body is drawn at rest, then slid horizontally while a step transition
//! is running.

mod field_renderer;
mod step_forms;

use crate::component::FormComponent;
use crate::state::{Step, Wizard};
use crate::ui::review;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// What every step renderer needs
pub struct StepView<'a> {
    pub wizard: &'a Wizard,
    pub dimmed: bool,
    pub theme: &'a Theme,
}

/// Draw the active step's header and body
pub fn draw_step(frame: &mut Frame, area: Rect, component: &FormComponent, theme: &Theme) {
    let (offset, dimmed) = match &component.transition {
        Some(transition) => (
            transition.offset_columns(area.width),
            transition.is_dimmed(),
        ),
        None => (0, false),
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = StepView {
        wizard: &component.wizard,
        dimmed,
        theme,
    };
    let step = component.wizard.step();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Body
        ])
        .split(area);

    let title_color = if dimmed { theme.muted() } else { theme.text() };
    frame.render_widget(
        Paragraph::new(Span::styled(
            step.name(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            step.description(),
            Style::default().fg(theme.muted()),
        )),
        chunks[1],
    );

    match step {
        Step::PersonalInfo => step_forms::draw_personal_info(frame, chunks[3], &view),
        Step::Address => step_forms::draw_address(frame, chunks[3], &view),
        Step::Preferences => step_forms::draw_preferences(frame, chunks[3], &view),
        Step::Review => review::draw(frame, chunks[3], &view),
    }

    slide(frame.buffer_mut(), area, offset, theme.base_style());
}

/// Move the cells of `area` right (positive) or left (negative).
///
/// Cells pushed past the edge are dropped; uncovered cells are blanked with
/// `blank`.
fn slide(buf: &mut Buffer, area: Rect, offset: i32, blank: Style) {
    let area = area.intersection(buf.area);
    let width = area.width as usize;
    let shift = offset.unsigned_abs().min(area.width as u32) as usize;
    if shift == 0 {
        return;
    }

    for y in area.top()..area.bottom() {
        let row: Vec<_> = (area.left()..area.right())
            .map(|x| buf[(x, y)].clone())
            .collect();
        for (i, x) in (area.left()..area.right()).enumerate() {
            let source = if offset > 0 {
                i.checked_sub(shift)
            } else {
                Some(i + shift).filter(|&s| s < width)
            };
            let cell = &mut buf[(x, y)];
            match source {
                Some(s) => *cell = row[s].clone(),
                None => {
                    cell.reset();
                    cell.set_style(blank);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepTransition;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn slid(lines: [&str; 2], offset: i32) -> Buffer {
        let mut buf = Buffer::with_lines(lines);
        let area = buf.area;
        slide(&mut buf, area, offset, Style::default());
        buf
    }

    #[test]
    fn test_zero_offset_keeps_cells() {
        assert_eq!(slid(["abcd", "efgh"], 0), Buffer::with_lines(["abcd", "efgh"]));
    }

    #[test]
    fn test_positive_offset_moves_right() {
        assert_eq!(slid(["abcd", "efgh"], 2), Buffer::with_lines(["  ab", "  ef"]));
    }

    #[test]
    fn test_negative_offset_moves_left() {
        assert_eq!(slid(["abcd", "efgh"], -1), Buffer::with_lines(["bcd ", "fgh "]));
    }

    #[test]
    fn test_offset_is_clamped_to_width() {
        assert_eq!(slid(["abcd", "efgh"], 500), Buffer::with_lines(["    ", "    "]));
        assert_eq!(slid(["abcd", "efgh"], -500), Buffer::with_lines(["    ", "    "]));
    }

    #[test]
    fn test_only_the_given_area_moves() {
        let mut buf = Buffer::with_lines(["abcd", "efgh"]);
        slide(&mut buf, Rect::new(1, 0, 3, 1), 1, Style::default());
        assert_eq!(buf, Buffer::with_lines(["a bc", "efgh"]));
    }

    /// Column of "Information" in the step title row, if visible
    fn title_column(transition: Option<StepTransition>) -> Option<usize> {
        let mut component = FormComponent::mount(vec!["Canada".to_string()], DURATION);
        component.transition = transition;
        let theme = Theme::new(true);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_step(frame, area, &component, &theme);
            })
            .unwrap();
        let row: String = terminal.backend().buffer().content()[..80]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        row.find("Information")
    }

    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn test_resting_body_is_not_shifted() {
        assert_eq!(title_column(None), Some(9));
    }

    #[test]
    fn test_forward_slide_starts_half_width_right() {
        let transition = StepTransition::new(1, DURATION);
        assert_eq!(title_column(Some(transition)), Some(49));
    }

    #[test]
    fn test_backward_slide_starts_half_width_left() {
        let transition = StepTransition::new(-1, DURATION);
        assert_eq!(title_column(Some(transition)), None);
    }

    #[test]
    fn test_backward_slide_moves_body_left() {
        let mut transition = StepTransition::new(-1, DURATION);
        transition.update_with_elapsed(Duration::from_millis(250));
        let shift = transition.offset_columns(80);
        assert!((-9..0).contains(&shift), "{shift}");

        assert_eq!(title_column(Some(transition)), Some((9 + shift) as usize));
    }
}
