//! Toast overlay

use super::base::{render_dialog, DialogConfig, DialogPosition};
use crate::state::Toast;
use crate::ui::theme::Theme;
use ratatui::Frame;

/// Render a toast in the top-right corner
pub fn render_toast(frame: &mut Frame, toast: &Toast, theme: &Theme) {
    render_dialog(
        frame,
        DialogConfig {
            title: &toast.title,
            title_color: theme.success(),
            border_color: theme.success(),
            text_color: theme.text(),
            background: theme.background(),
            message: &toast.description,
            hint: None,
            max_width: 40,
            position: DialogPosition::TopRight,
        },
    );
}
