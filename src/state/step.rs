//! Wizard step definitions

use super::forms::FieldName;

/// One ordinal stage of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    PersonalInfo,
    Address,
    Preferences,
    Review,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 4] = [
        Step::PersonalInfo,
        Step::Address,
        Step::Preferences,
        Step::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal position (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::Address => 1,
            Self::Preferences => 2,
            Self::Review => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Identifier shown in the progress bar
    pub fn id(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Step 1",
            Self::Address => "Step 2",
            Self::Preferences => "Step 3",
            Self::Review => "Step 4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Address => "Address",
            Self::Preferences => "Preferences",
            Self::Review => "Review & Submit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Provide your personal details.",
            Self::Address => "Address where you can receive mail.",
            Self::Preferences => "Select your preferences.",
            Self::Review => "Please review your information before submission.",
        }
    }

    /// Fields validated before leaving this step, in validation order
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Self::PersonalInfo => &[FieldName::FirstName, FieldName::LastName, FieldName::Email],
            Self::Address => &[
                FieldName::Country,
                FieldName::State,
                FieldName::City,
                FieldName::Street,
                FieldName::Zip,
            ],
            Self::Preferences | Self::Review => &[],
        }
    }

    pub fn is_last(&self) -> bool {
        self.index() == Self::COUNT - 1
    }

    /// Leaving this step submits the form
    pub fn is_submission_step(&self) -> bool {
        self.index() == Self::COUNT - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
        assert_eq!(Step::from_index(4), None);
    }

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(Step::default(), Step::PersonalInfo);
    }

    #[test]
    fn test_only_preferences_submits() {
        let submitting: Vec<_> = Step::ALL
            .iter()
            .filter(|s| s.is_submission_step())
            .collect();
        assert_eq!(submitting, vec![&Step::Preferences]);
    }

    #[test]
    fn test_only_review_is_last() {
        assert!(Step::Review.is_last());
        assert!(!Step::Preferences.is_last());
    }

    #[test]
    fn test_static_steps_have_no_fields() {
        assert!(Step::Preferences.fields().is_empty());
        assert!(Step::Review.fields().is_empty());
    }

    #[test]
    fn test_every_field_belongs_to_exactly_one_step() {
        for field in FieldName::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
        }
    }
}
