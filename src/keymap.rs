//! Arrow-key step navigation
//!
//! A [`NavBinding`] exists only while a form component is mounted. Dropping
//! the component releases the binding, after which arrow keys are no longer
//! translated into navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Advance,
    Retreat,
    /// Key consumed without navigating
    Suppressed,
}

/// Arrow-key binding owned by a mounted form component
#[derive(Debug)]
pub struct NavBinding {
    owner: &'static str,
}

impl NavBinding {
    pub fn bind(owner: &'static str) -> Self {
        tracing::debug!(owner, "navigation keys bound");
        Self { owner }
    }

    /// Translate a key press, given whether the form has been submitted.
    ///
    /// Returns `None` for keys the binding does not handle.
    pub fn translate(&self, key: &KeyEvent, submitted: bool) -> Option<NavAction> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Right => Some(NavAction::Advance),
            KeyCode::Left if submitted => Some(NavAction::Suppressed),
            KeyCode::Left => Some(NavAction::Retreat),
            _ => None,
        }
    }
}

impl Drop for NavBinding {
    fn drop(&mut self) {
        tracing::debug!(owner = self.owner, "navigation keys released");
    }
}
