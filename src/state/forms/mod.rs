//! Form domain layer
//!
//! Field values, preference checkboxes and focus handling for the wizard.

mod field;
mod form_state;

pub use field::{Checkbox, FieldName, FormField};
pub use form_state::{FocusRing, FocusTarget, Form, FormData};
