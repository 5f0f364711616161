//! Form data and focus handling

use super::field::{Checkbox, FieldName, FormField};
use crate::state::step::Step;

/// Trait for common focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Something on the current step that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    Preference(usize),
}

/// Ordered focus targets of one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
    active: usize,
}

impl FocusRing {
    /// Build the ring for a step in on-screen order
    pub fn for_step(step: Step, preference_count: usize) -> Self {
        let targets = match step {
            Step::PersonalInfo => [FieldName::FirstName, FieldName::LastName, FieldName::Email]
                .into_iter()
                .map(FocusTarget::Field)
                .collect(),
            Step::Address => [
                FieldName::Country,
                FieldName::Street,
                FieldName::City,
                FieldName::State,
                FieldName::Zip,
            ]
            .into_iter()
            .map(FocusTarget::Field)
            .collect(),
            Step::Preferences => (0..preference_count).map(FocusTarget::Preference).collect(),
            Step::Review => Vec::new(),
        };
        Self { targets, active: 0 }
    }

    pub fn current(&self) -> Option<FocusTarget> {
        self.targets.get(self.active).copied()
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == Some(target)
    }

    /// Move focus to `target` if it is on this ring
    pub fn focus(&mut self, target: FocusTarget) -> bool {
        match self.targets.iter().position(|t| *t == target) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

impl Form for FocusRing {
    fn field_count(&self) -> usize {
        self.targets().len()
    }
    fn active_field(&self) -> usize {
        self.active
    }
    fn set_active_field(&mut self, index: usize) {
        self.active = index.min(self.targets.len().saturating_sub(1));
    }
}

/// Values held by the form while the user fills it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<FormField>,
    pub preferences: Vec<Checkbox>,
}

impl FormData {
    pub fn new(countries: Vec<String>) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| match name {
                FieldName::Country => FormField::choice(name, countries.clone()),
                _ => FormField::text(name),
            })
            .collect();
        Self {
            fields,
            preferences: vec![
                Checkbox::new("Receive Newsletters"),
                Checkbox::new("Enable Notifications"),
            ],
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[Self::slot(name)]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[Self::slot(name)]
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    pub fn toggle_preference(&mut self, index: usize) {
        if let Some(checkbox) = self.preferences.get_mut(index) {
            checkbox.toggle();
        }
    }

    /// Clear every input, including validation messages and preferences
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        for checkbox in &mut self.preferences {
            checkbox.checked = false;
        }
    }

    fn slot(name: FieldName) -> usize {
        match name {
            FieldName::FirstName => 0,
            FieldName::LastName => 1,
            FieldName::Email => 2,
            FieldName::Country => 3,
            FieldName::Street => 4,
            FieldName::City => 5,
            FieldName::State => 6,
            FieldName::Zip => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<String> {
        vec!["United States".to_string(), "Canada".to_string()]
    }

    mod focus_ring {
        use super::*;

        #[test]
        fn test_personal_info_order() {
            let ring = FocusRing::for_step(Step::PersonalInfo, 2);
            assert_eq!(
                ring.targets(),
                &[
                    FocusTarget::Field(FieldName::FirstName),
                    FocusTarget::Field(FieldName::LastName),
                    FocusTarget::Field(FieldName::Email),
                ]
            );
            assert_eq!(ring.current(), Some(FocusTarget::Field(FieldName::FirstName)));
        }

        #[test]
        fn test_address_uses_screen_order() {
            let ring = FocusRing::for_step(Step::Address, 2);
            assert_eq!(ring.field_count(), 5);
            assert_eq!(ring.targets()[1], FocusTarget::Field(FieldName::Street));
        }

        #[test]
        fn test_preferences_ring_has_checkboxes() {
            let ring = FocusRing::for_step(Step::Preferences, 2);
            assert_eq!(
                ring.targets(),
                &[FocusTarget::Preference(0), FocusTarget::Preference(1)]
            );
        }

        #[test]
        fn test_review_ring_is_empty_and_safe() {
            let mut ring = FocusRing::for_step(Step::Review, 2);
            ring.next_field();
            ring.prev_field();
            assert_eq!(ring.current(), None);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut ring = FocusRing::for_step(Step::PersonalInfo, 0);
            for _ in 0..3 {
                ring.next_field();
            }
            assert_eq!(ring.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut ring = FocusRing::for_step(Step::PersonalInfo, 0);
            ring.prev_field();
            assert_eq!(ring.current(), Some(FocusTarget::Field(FieldName::Email)));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut ring = FocusRing::for_step(Step::Address, 0);
            ring.set_active_field(100);
            assert_eq!(ring.active_field(), 4);
        }

        #[test]
        fn test_focus_unknown_target_is_rejected() {
            let mut ring = FocusRing::for_step(Step::PersonalInfo, 0);
            assert!(!ring.focus(FocusTarget::Field(FieldName::Zip)));
            assert!(ring.focus(FocusTarget::Field(FieldName::Email)));
            assert!(ring.is_focused(FocusTarget::Field(FieldName::Email)));
        }
    }

    mod form_data {
        use super::*;

        #[test]
        fn test_new_has_every_field() {
            let form = FormData::new(countries());
            for name in FieldName::ALL {
                assert_eq!(form.field(name).name, name);
            }
        }

        #[test]
        fn test_country_is_a_choice() {
            let form = FormData::new(countries());
            assert!(form.field(FieldName::Country).is_choice());
            assert_eq!(form.value(FieldName::Country), "United States");
        }

        #[test]
        fn test_field_mut_targets_the_named_field() {
            let mut form = FormData::new(countries());
            form.field_mut(FieldName::Zip).set_text("8001");
            assert_eq!(form.value(FieldName::Zip), "8001");
            assert_eq!(form.value(FieldName::City), "");
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = FormData::new(countries());
            form.field_mut(FieldName::FirstName).set_text("Ada");
            form.field_mut(FieldName::Country).select_next();
            form.toggle_preference(1);
            form.reset();
            assert_eq!(form, FormData::new(countries()));
        }

        #[test]
        fn test_toggle_out_of_range_is_ignored() {
            let mut form = FormData::new(countries());
            form.toggle_preference(9);
            assert!(form.preferences.iter().all(|c| !c.checked));
        }
    }
}
