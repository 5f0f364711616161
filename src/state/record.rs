//! Captured form submission

use super::forms::{FieldName, FormData};
use chrono::{DateTime, Utc};

/// The values captured when the form is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub submitted_at: DateTime<Utc>,
}

impl FormRecord {
    /// Snapshot every held value
    pub fn capture(form: &FormData, submitted_at: DateTime<Utc>) -> Self {
        let value = |name| form.value(name).to_string();
        Self {
            first_name: value(FieldName::FirstName),
            last_name: value(FieldName::LastName),
            email: value(FieldName::Email),
            country: value(FieldName::Country),
            street: value(FieldName::Street),
            city: value(FieldName::City),
            state: value(FieldName::State),
            zip: value(FieldName::Zip),
            submitted_at,
        }
    }

    /// Labelled values in review order
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("First Name", self.first_name.as_str()),
            ("Last Name", self.last_name.as_str()),
            ("Email", self.email.as_str()),
            ("Country", self.country.as_str()),
            ("Street", self.street.as_str()),
            ("City", self.city.as_str()),
            ("State", self.state.as_str()),
            ("ZIP", self.zip.as_str()),
        ]
    }
}
