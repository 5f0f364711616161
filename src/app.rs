//! Application state and core logic

use crate::component::FormComponent;
use crate::config::TuiConfig;
use crate::state::ToastQueue;
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Mounted form, if any
    pub component: Option<FormComponent>,
    /// Pending notifications
    pub toasts: ToastQueue,
    /// Active palette
    pub theme: Theme,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App and mount the form
    pub fn new(config: TuiConfig) -> Self {
        let component = FormComponent::mount(config.countries(), config.transition_duration());
        Self {
            component: Some(component),
            toasts: ToastQueue::new(config.toast_duration()),
            theme: Theme::new(config.dark_mode()),
            quit: false,
        }
    }

    /// Advance animations and expire toasts
    pub fn tick(&mut self) {
        if let Some(ref mut component) = self.component {
            component.tick();
        }
        self.toasts.prune();
    }

    /// Whether the next frame should come quickly
    pub fn is_animating(&self) -> bool {
        self.component
            .as_ref()
            .is_some_and(FormComponent::is_animating)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Release the form and its key binding
    pub fn unmount(&mut self) {
        if self.component.take().is_some() {
            tracing::debug!("form unmounted");
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        tracing::info!(dark = self.theme.is_dark(), "theme toggled");
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            _ => {
                if let Some(ref mut component) = self.component {
                    component.handle_key(key, &mut self.toasts);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Step};

    fn app() -> App {
        App::new(TuiConfig {
            transition_ms: Some(0),
            ..Default::default()
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn current_step(app: &App) -> Option<Step> {
        app.component.as_ref().map(|c| c.wizard.step())
    }

    #[test]
    fn test_new_mounts_form() {
        let app = app();
        assert_eq!(current_step(&app), Some(Step::PersonalInfo));
        assert!(!app.should_quit());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_config_sets_initial_theme() {
        let app = App::new(TuiConfig {
            dark_mode: Some(false),
            ..Default::default()
        });
        assert!(!app.theme.is_dark());
    }

    #[test]
    fn test_config_countries_reach_form() {
        let app = App::new(TuiConfig {
            countries: Some(vec!["Kenya".to_string()]),
            ..Default::default()
        });
        let component = app.component.as_ref().unwrap();
        assert_eq!(component.wizard.form().value(FieldName::Country), "Kenya");
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_t_toggles_theme() {
        let mut app = app();
        let before = app.theme.is_dark();
        app.handle_key(ctrl('t'));
        assert_ne!(app.theme.is_dark(), before);
    }

    #[test]
    fn test_plain_t_is_typed() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('t')));
        let component = app.component.as_ref().unwrap();
        assert_eq!(component.wizard.form().value(FieldName::FirstName), "t");
    }

    #[test]
    fn test_unmounted_app_ignores_navigation() {
        let mut app = app();
        app.unmount();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Left));
        assert!(app.component.is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_tick_finishes_zero_length_animation() {
        let mut app = app();
        app.tick();
        assert!(!app.is_animating());
    }

    #[test]
    fn test_submission_raises_toast() {
        let mut app = app();
        {
            let component = app.component.as_mut().unwrap();
            for c in "Ada".chars() {
                component.wizard.type_char(c);
            }
            component.wizard.focus_next();
            for c in "Lovelace".chars() {
                component.wizard.type_char(c);
            }
            component.wizard.focus_next();
            for c in "ada@x.com".chars() {
                component.wizard.type_char(c);
            }
        }
        app.handle_key(key(KeyCode::Right));
        {
            // Focus starts on the country select; street, city, state, zip follow
            let component = app.component.as_mut().unwrap();
            for c in ['1', '2', '3', '4'] {
                component.wizard.focus_next();
                component.wizard.type_char(c);
            }
        }
        app.handle_key(key(KeyCode::Right));
        assert!(app.toasts.is_empty());

        app.handle_key(key(KeyCode::Right));

        assert_eq!(current_step(&app), Some(Step::Review));
        assert_eq!(
            app.toasts.current().map(|t| t.title.as_str()),
            Some("Form Submitted")
        );
    }
}
