//! Form field value objects

/// Every value the form collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Country,
    Street,
    City,
    State,
    Zip,
}

impl FieldName {
    /// All fields in schema order
    pub const ALL: [FieldName; 8] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Country,
        FieldName::Street,
        FieldName::City,
        FieldName::State,
        FieldName::Zip,
    ];

    /// Schema key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Country => "country",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }

    /// Input label shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::Country => "Country",
            Self::Street => "Street address",
            Self::City => "City",
            Self::State => "State / Province",
            Self::Zip => "ZIP / Postal code",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice { options: Vec<String>, selected: usize },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its value and the last validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a new choice field preselecting the first option
    pub fn choice(name: FieldName, options: Vec<String>) -> Self {
        Self {
            name,
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
            error: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Current value as text (the selected option for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                options.get(*selected).map(String::as_str).unwrap_or("")
            }
        }
    }

    /// Set the text value (ignored by choice fields)
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice { .. } => self.select_next(),
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { .. } => self.select_prev(),
        }
    }

    /// Move a choice field to its next option (wraps around)
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    /// Move a choice field to its previous option (wraps around)
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = if *selected == 0 {
                    options.len() - 1
                } else {
                    *selected - 1
                };
            }
        }
    }

    /// Reset the value and drop any validation message
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = 0,
        }
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => format!("‹ {} ›", self.as_text()),
        }
    }
}

/// A static on/off preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: &'static str,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            checked: false,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}
