//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod review;
pub mod terminal;
pub mod theme;

use crate::app::App;
use ratatui::{widgets::Block, Frame};

pub use theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    // Paint the palette background
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let regions = layout::create_layout(area);
    layout::draw_header(frame, regions.header, theme);

    if let Some(component) = &app.component {
        layout::draw_progress(frame, regions.progress, component.wizard.step(), theme);
        forms::draw_step(frame, regions.body, component, theme);
        layout::draw_navigation(frame, regions.navigation, &component.wizard, theme);
    }

    layout::draw_status_bar(frame, regions.status_bar, theme);

    if let Some(toast) = app.toasts.current() {
        components::render_toast(frame, toast, theme);
    }
}
