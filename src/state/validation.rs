//! Declarative field validation
//!
//! Each field maps to an ordered list of constraints. A field passes when all
//! of its constraints pass; the first failing constraint supplies the message.

use super::forms::{FieldName, FormData};
use thiserror::Error;

/// A single rule a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Non-empty after trimming whitespace
    Required(&'static str),
    /// Looks like `local@domain.tld`
    Email(&'static str),
}

impl Constraint {
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        match *self {
            Constraint::Required(message) if value.trim().is_empty() => Err(message),
            Constraint::Email(message) if !is_email(value) => Err(message),
            _ => Ok(()),
        }
    }
}

/// Constraint table for every field
pub fn constraints(field: FieldName) -> &'static [Constraint] {
    match field {
        FieldName::FirstName => &[Constraint::Required("First name is required")],
        FieldName::LastName => &[Constraint::Required("Last name is required")],
        FieldName::Email => &[
            Constraint::Required("Email is required"),
            Constraint::Email("Invalid email address"),
        ],
        FieldName::Country => &[Constraint::Required("Country is required")],
        FieldName::Street => &[Constraint::Required("Street is required")],
        FieldName::City => &[Constraint::Required("City is required")],
        FieldName::State => &[Constraint::Required("State is required")],
        FieldName::Zip => &[Constraint::Required("Zip is required")],
    }
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: &'static str,
}

/// One or more fields failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation: {}", .errors.len(), field_keys(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// First failing field in validation order
    pub fn first_field(&self) -> Option<FieldName> {
        self.errors.first().map(|e| e.field)
    }

    pub fn message_for(&self, field: FieldName) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

fn field_keys(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate one value against its field's constraints
pub fn validate_field(field: FieldName, value: &str) -> Result<(), FieldError> {
    for constraint in constraints(field) {
        constraint
            .check(value)
            .map_err(|message| FieldError { field, message })?;
    }
    Ok(())
}

/// Validate the listed fields. An empty list always passes.
pub fn validate_fields(form: &FormData, fields: &[FieldName]) -> Result<(), ValidationError> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|&field| validate_field(field, form.value(field)).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

/// Attach or clear the inline message of each listed field
pub fn annotate(form: &mut FormData, fields: &[FieldName], result: &Result<(), ValidationError>) {
    for &field in fields {
        let message = result.as_ref().err().and_then(|e| e.message_for(field));
        form.field_mut(field).error = message.map(str::to_string);
    }
}

/// Loose email shape check: one `@`, a non-empty local part and a dotted domain
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormData {
        FormData::new(vec!["United States".to_string()])
    }

    mod email_shape {
        use super::*;

        #[test]
        fn test_accepts_plain_addresses() {
            assert!(is_email("ada@x.com"));
            assert!(is_email("first.last+tag@mail.example.org"));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for value in [
                "",
                "ada",
                "@x.com",
                "ada@",
                "ada@x",
                "ada@x.",
                "ada@.com",
                "ada@@x.com",
                "a@b@c.com",
                "ada lovelace@x.com",
            ] {
                assert!(!is_email(value), "{value:?} accepted");
            }
        }
    }

    mod constraints_table {
        use super::*;

        #[test]
        fn test_every_field_is_required() {
            for field in FieldName::ALL {
                assert!(
                    matches!(constraints(field).first(), Some(Constraint::Required(_))),
                    "{field:?}"
                );
            }
        }

        #[test]
        fn test_whitespace_only_is_missing() {
            assert_eq!(
                validate_field(FieldName::City, "   "),
                Err(FieldError {
                    field: FieldName::City,
                    message: "City is required",
                })
            );
        }

        #[test]
        fn test_empty_email_reports_required_not_shape() {
            let err = validate_field(FieldName::Email, "").unwrap_err();
            assert_eq!(err.message, "Email is required");
        }

        #[test]
        fn test_bad_email_reports_shape() {
            let err = validate_field(FieldName::Email, "ada").unwrap_err();
            assert_eq!(err.message, "Invalid email address");
        }
    }

    mod field_list {
        use super::*;

        #[test]
        fn test_empty_field_list_passes() {
            assert_eq!(validate_fields(&form(), &[]), Ok(()));
        }

        #[test]
        fn test_collects_every_failure_in_order() {
            let mut form = form();
            form.field_mut(FieldName::LastName).set_text("Lovelace");
            let err = validate_fields(
                &form,
                &[FieldName::FirstName, FieldName::LastName, FieldName::Email],
            )
            .unwrap_err();
            let failed: Vec<_> = err.errors.iter().map(|e| e.field).collect();
            assert_eq!(failed, vec![FieldName::FirstName, FieldName::Email]);
            assert_eq!(err.first_field(), Some(FieldName::FirstName));
        }

        #[test]
        fn test_default_country_satisfies_required() {
            assert_eq!(validate_fields(&form(), &[FieldName::Country]), Ok(()));
        }

        #[test]
        fn test_error_message_names_fields() {
            let err = validate_fields(&form(), &[FieldName::Zip]).unwrap_err();
            assert_eq!(err.to_string(), "1 field(s) failed validation: zip");
        }
    }

    mod annotations {
        use super::*;

        #[test]
        fn test_sets_and_clears_messages() {
            let mut form = form();
            let fields = [FieldName::FirstName, FieldName::LastName];

            let result = validate_fields(&form, &fields);
            annotate(&mut form, &fields, &result);
            assert_eq!(
                form.field(FieldName::FirstName).error.as_deref(),
                Some("First name is required")
            );

            form.field_mut(FieldName::FirstName).set_text("Ada");
            form.field_mut(FieldName::LastName).set_text("Lovelace");
            let result = validate_fields(&form, &fields);
            annotate(&mut form, &fields, &result);
            assert!(form.field(FieldName::FirstName).error.is_none());
            assert!(form.field(FieldName::LastName).error.is_none());
        }

        #[test]
        fn test_leaves_unlisted_fields_alone() {
            let mut form = form();
            form.field_mut(FieldName::Zip).error = Some("Zip is required".to_string());
            annotate(&mut form, &[FieldName::FirstName], &Ok(()));
            assert!(form.field(FieldName::Zip).error.is_some());
        }
    }
}
