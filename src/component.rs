//! The mounted multi-step form

use crate::keymap::{NavAction, NavBinding};
use crate::state::{StepTransition, SubmissionHandler, Transition, Wizard};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// A live form instance: wizard state, its key binding and the running animation
#[derive(Debug)]
pub struct FormComponent {
    pub wizard: Wizard,
    pub transition: Option<StepTransition>,
    transition_duration: Duration,
    binding: NavBinding,
}

impl FormComponent {
    /// Mount a fresh form; the navigation binding lives as long as the component
    pub fn mount(countries: Vec<String>, transition_duration: Duration) -> Self {
        Self {
            wizard: Wizard::new(countries),
            transition: Some(StepTransition::new(0, transition_duration)),
            transition_duration,
            binding: NavBinding::bind("form"),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Advance animations; finished transitions are dropped
    pub fn tick(&mut self) {
        if let Some(ref mut transition) = self.transition {
            transition.update();
            if transition.is_complete() {
                self.transition = None;
            }
        }
    }

    /// Handle a key press routed to the form
    pub fn handle_key(&mut self, key: KeyEvent, handler: &mut impl SubmissionHandler) {
        if let Some(action) = self.binding.translate(&key, self.wizard.is_submitted()) {
            match action {
                NavAction::Advance => self.advance(handler),
                NavAction::Retreat => self.retreat(),
                NavAction::Suppressed => tracing::debug!("back navigation suppressed"),
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.advance(handler),
            KeyCode::Tab | KeyCode::Down => self.wizard.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.wizard.focus_prev(),
            KeyCode::Backspace => self.wizard.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.wizard.type_char(c)
            }
            _ => {}
        }
    }

    pub fn advance(&mut self, handler: &mut impl SubmissionHandler) {
        match self.wizard.advance(handler) {
            Ok(Transition::Stayed) => {}
            Ok(_) => self.start_transition(),
            Err(err) => tracing::debug!("advance blocked: {err}"),
        }
    }

    pub fn retreat(&mut self) {
        if self.wizard.retreat() != Transition::Stayed {
            self.start_transition();
        }
    }

    fn start_transition(&mut self) {
        let delta = self.wizard.state().delta();
        self.transition = Some(StepTransition::new(delta, self.transition_duration));
    }
}
