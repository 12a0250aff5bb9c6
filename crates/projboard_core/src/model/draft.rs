//! Unvalidated project input.
//!
//! # Responsibility
//! - Capture raw form input before it is admitted to the store.
//! - Run the field validator over title, description and people.
//!
//! # Invariants
//! - A draft that passes `validate` has an integral people count within the
//!   configured range.

use crate::config::ProjectRules;
use crate::validation::validator::{validate, Validatable};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form field a draft was rejected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
}

impl ProjectField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Draft rejected by the admission rules.
///
/// Only the first failing field (in form order) is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectValidationError {
    pub field: ProjectField,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid input for `{}`, please try again",
            self.field.as_str()
        )
    }
}

impl Error for ProjectValidationError {}

/// Project input as gathered from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Kept as a float so unparsable or fractional input can be rejected
    /// by validation instead of at parse time.
    pub people: f64,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: f64::from(people),
        }
    }

    /// Builds a draft from raw form strings.
    ///
    /// A blank people field reads as `0` and unparsable text as `NaN`; both
    /// fail validation.
    pub fn from_form(title: &str, description: &str, people: &str) -> Self {
        let people = people.trim();
        let people = if people.is_empty() {
            0.0
        } else {
            people.parse::<f64>().unwrap_or(f64::NAN)
        };

        Self {
            title: title.to_string(),
            description: description.to_string(),
            people,
        }
    }

    /// Checks every field against `rules`.
    ///
    /// # Errors
    /// Returns the first failing field among title, description, people.
    pub fn validate(&self, rules: &ProjectRules) -> Result<(), ProjectValidationError> {
        let title = Validatable::new(self.title.as_str()).required();
        let description = Validatable::new(self.description.as_str())
            .required()
            .min_length(rules.description_min_length);
        let people = Validatable::new(self.people)
            .required()
            .min(f64::from(rules.people_min))
            .max(f64::from(rules.people_max));

        if !validate(&title) {
            return Err(ProjectValidationError {
                field: ProjectField::Title,
            });
        }
        if !validate(&description) {
            return Err(ProjectValidationError {
                field: ProjectField::Description,
            });
        }
        if !validate(&people) || self.people.fract() != 0.0 {
            return Err(ProjectValidationError {
                field: ProjectField::People,
            });
        }
        Ok(())
    }

    /// People count as an integer; meaningful only after `validate` passed.
    pub(crate) fn people_count(&self) -> u32 {
        self.people as u32
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectDraft, ProjectField, ProjectValidationError};
    use crate::config::ProjectRules;

    fn rejected_field(draft: &ProjectDraft) -> ProjectField {
        draft
            .validate(&ProjectRules::default())
            .expect_err("draft should be rejected")
            .field
    }

    #[test]
    fn from_form_parses_people() {
        assert_eq!(ProjectDraft::from_form("t", "d", " 3 ").people, 3.0);
        assert_eq!(ProjectDraft::from_form("t", "d", "").people, 0.0);
        assert!(ProjectDraft::from_form("t", "d", "three").people.is_nan());
    }

    #[test]
    fn fractional_people_is_rejected() {
        let draft = ProjectDraft::from_form("Build API", "REST endpoints", "2.5");
        assert_eq!(rejected_field(&draft), ProjectField::People);
    }

    #[test]
    fn first_failing_field_wins() {
        let draft = ProjectDraft::from_form("", "abc", "9");
        assert_eq!(rejected_field(&draft), ProjectField::Title);
    }

    #[test]
    fn error_message_names_the_field() {
        let err = ProjectValidationError {
            field: ProjectField::Description,
        };
        assert!(err.to_string().contains("`description`"));
    }
}
