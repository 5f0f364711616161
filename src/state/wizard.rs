//! Step wizard controller
//!
//! Owns the step indices, the held form values and the captured record.
//! Forward motion goes through [`Wizard::advance`], which is gated by the
//! current step's validation; backward motion goes through
//! [`Wizard::retreat`], which is blocked once the form has been submitted.

use super::forms::{FieldName, FocusRing, FocusTarget, Form, FormData};
use super::record::FormRecord;
use super::step::Step;
use super::validation::{self, ValidationError};
use chrono::Utc;

/// Current/previous step indices plus the submission flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardState {
    pub current_step: usize,
    pub previous_step: usize,
    pub submitted: bool,
}

impl WizardState {
    pub fn step(&self) -> Step {
        Step::from_index(self.current_step).unwrap_or(Step::Review)
    }

    /// Direction of the last transition: positive forward, negative backward
    pub fn delta(&self) -> i32 {
        self.current_step as i32 - self.previous_step as i32
    }
}

/// Receives the record produced by a successful submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHandler {
    fn on_submit(&mut self, record: &FormRecord);
}

/// Outcome of a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    Submitted { from: Step, to: Step },
    Stayed,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    form: FormData,
    focus: FocusRing,
    record: Option<FormRecord>,
}

impl Wizard {
    pub fn new(countries: Vec<String>) -> Self {
        let form = FormData::new(countries);
        let focus = FocusRing::for_step(Step::default(), form.preferences.len());
        Self {
            state: WizardState::default(),
            form,
            focus,
            record: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    pub fn record(&self) -> Option<&FormRecord> {
        self.record.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    pub fn can_advance(&self) -> bool {
        !self.step().is_last() && !self.state.submitted
    }

    pub fn can_retreat(&self) -> bool {
        self.state.current_step > 0 && !self.state.submitted
    }

    /// Validate the current step and move forward one step.
    ///
    /// Leaving the second-to-last step submits the form first. On failure the
    /// step indices are untouched, the failing fields carry their messages and
    /// focus jumps to the first of them.
    pub fn advance(
        &mut self,
        handler: &mut impl SubmissionHandler,
    ) -> Result<Transition, ValidationError> {
        let from = self.step();
        self.check(from.fields())?;

        if from.is_last() {
            return Ok(Transition::Stayed);
        }

        let submitting = from.is_submission_step() && !self.state.submitted;
        if submitting {
            self.submit(handler)?;
        }

        self.move_to(self.state.current_step + 1);
        let to = self.step();
        tracing::debug!(from = from.id(), to = to.id(), "advanced");

        Ok(if submitting {
            Transition::Submitted { from, to }
        } else {
            Transition::Moved { from, to }
        })
    }

    /// Move back one step unless at the first step or already submitted
    pub fn retreat(&mut self) -> Transition {
        if !self.can_retreat() {
            return Transition::Stayed;
        }
        let from = self.step();
        self.move_to(self.state.current_step - 1);
        let to = self.step();
        tracing::debug!(from = from.id(), to = to.id(), "retreated");
        Transition::Moved { from, to }
    }

    pub fn focus_next(&mut self) {
        self.focus.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev_field();
    }

    /// Route a typed character to the focused input.
    ///
    /// Choice fields cycle their options and checkboxes toggle on space.
    pub fn type_char(&mut self, c: char) {
        match self.focus.current() {
            Some(FocusTarget::Field(name)) => {
                self.form.field_mut(name).push_char(c);
                self.revalidate(name);
            }
            Some(FocusTarget::Preference(index)) if c == ' ' => {
                self.form.toggle_preference(index);
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(FocusTarget::Field(name)) = self.focus.current() {
            self.form.field_mut(name).pop_char();
            self.revalidate(name);
        }
    }

    /// Validate and annotate `fields`, focusing the first failure
    fn check(&mut self, fields: &[FieldName]) -> Result<(), ValidationError> {
        let result = validation::validate_fields(&self.form, fields);
        validation::annotate(&mut self.form, fields, &result);
        if let Err(err) = &result {
            if let Some(field) = err.first_field() {
                self.focus.focus(FocusTarget::Field(field));
            }
            tracing::debug!(step = self.step().id(), "{err}");
        }
        result
    }

    fn submit(&mut self, handler: &mut impl SubmissionHandler) -> Result<(), ValidationError> {
        self.check(&FieldName::ALL)?;
        let record = FormRecord::capture(&self.form, Utc::now());
        handler.on_submit(&record);
        tracing::info!(at = %record.submitted_at, "form submitted");
        self.record = Some(record);
        self.form.reset();
        self.state.submitted = true;
        Ok(())
    }

    fn move_to(&mut self, index: usize) {
        self.state.previous_step = self.state.current_step;
        self.state.current_step = index;
        self.focus = FocusRing::for_step(self.step(), self.form.preferences.len());
    }

    /// Fields only re-validate once a failed attempt has flagged them
    fn revalidate(&mut self, name: FieldName) {
        if self.form.field(name).error.is_some() {
            let result = validation::validate_fields(&self.form, &[name]);
            validation::annotate(&mut self.form, &[name], &result);
        }
    }
}
