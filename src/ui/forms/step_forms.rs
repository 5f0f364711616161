//! Data-entry step layouts

use super::field_renderer::{draw_checkbox, draw_field, FIELD_HEIGHT};
use super::StepView;
use crate::state::{FieldName, FocusTarget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

fn field(frame: &mut Frame, area: Rect, view: &StepView, name: FieldName) {
    let is_active = view.wizard.focus().is_focused(FocusTarget::Field(name));
    draw_field(
        frame,
        area,
        view.wizard.form().field(name),
        is_active,
        view.dimmed,
        view.theme,
    );
}

fn rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); count];
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn columns(area: Rect, ratios: &[u32]) -> Vec<Rect> {
    let total: u32 = ratios.iter().sum();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(ratios.iter().map(|&r| Constraint::Ratio(r, total)))
        .spacing(2)
        .split(area)
        .to_vec()
}

/// First/last name side by side, email below
pub fn draw_personal_info(frame: &mut Frame, area: Rect, view: &StepView) {
    let rows = rows(area, 2);

    let names = columns(rows[0], &[1, 1]);
    field(frame, names[0], view, FieldName::FirstName);
    field(frame, names[1], view, FieldName::LastName);

    let email = columns(rows[1], &[2, 1]);
    field(frame, email[0], view, FieldName::Email);
}

/// Country, street, then city/state/zip on one row
pub fn draw_address(frame: &mut Frame, area: Rect, view: &StepView) {
    let rows = rows(area, 3);

    let country = columns(rows[0], &[1, 1]);
    field(frame, country[0], view, FieldName::Country);

    field(frame, rows[1], view, FieldName::Street);

    let locality = columns(rows[2], &[1, 1, 1]);
    field(frame, locality[0], view, FieldName::City);
    field(frame, locality[1], view, FieldName::State);
    field(frame, locality[2], view, FieldName::Zip);
}

/// One checkbox per line
pub fn draw_preferences(frame: &mut Frame, area: Rect, view: &StepView) {
    let preferences = &view.wizard.form().preferences;
    let mut constraints: Vec<Constraint> = preferences
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Min(0));
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, checkbox) in preferences.iter().enumerate() {
        let is_active = view
            .wizard
            .focus()
            .is_focused(FocusTarget::Preference(index));
        draw_checkbox(
            frame,
            lines[index * 2],
            checkbox,
            is_active,
            view.dimmed,
            view.theme,
        );
    }
}
