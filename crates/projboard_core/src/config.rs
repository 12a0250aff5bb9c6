//! Admission rules for new projects.
//!
//! # Responsibility
//! - Hold the numeric limits applied to project drafts.
//! - Load from any serde source; missing keys keep their defaults.
//!
//! # Invariants
//! - `people_min >= 1` and `people_min <= people_max` for accepted rules.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
const DEFAULT_PEOPLE_MIN: u32 = 1;
const DEFAULT_PEOPLE_MAX: u32 = 5;

/// Limits checked by [`crate::ProjectDraft::validate`].
///
/// Titles are only required to be non-blank and have no tunable limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRules {
    /// Minimum description length in characters, untrimmed.
    pub description_min_length: usize,
    /// Smallest accepted team size, inclusive.
    pub people_min: u32,
    /// Largest accepted team size, inclusive.
    pub people_max: u32,
}

impl Default for ProjectRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

impl ProjectRules {
    /// Checks that the limits describe a non-empty team size range.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.people_min == 0 {
            return Err(RulesError::ZeroPeopleMin);
        }
        if self.people_min > self.people_max {
            return Err(RulesError::EmptyPeopleRange {
                min: self.people_min,
                max: self.people_max,
            });
        }
        Ok(())
    }
}

/// Rejected rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    ZeroPeopleMin,
    EmptyPeopleRange { min: u32, max: u32 },
}

impl Display for RulesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPeopleMin => write!(f, "people_min must be at least 1"),
            Self::EmptyPeopleRange { min, max } => {
                write!(f, "people_min ({min}) must be <= people_max ({max})")
            }
        }
    }
}

impl Error for RulesError {}

#[cfg(test)]
mod tests {
    use super::{ProjectRules, RulesError};

    #[test]
    fn defaults_match_form_limits() {
        let rules = ProjectRules::default();
        assert_eq!(rules.description_min_length, 5);
        assert_eq!(rules.people_min, 1);
        assert_eq!(rules.people_max, 5);
        rules.validate().expect("default rules are valid");
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let rules: ProjectRules =
            serde_json::from_str(r#"{ "people_max": 8 }"#).expect("partial rules parse");
        assert_eq!(rules.people_max, 8);
        assert_eq!(rules.people_min, 1);
        assert_eq!(rules.description_min_length, 5);
    }

    #[test]
    fn validate_rejects_degenerate_ranges() {
        let zero = ProjectRules {
            people_min: 0,
            ..ProjectRules::default()
        };
        assert_eq!(zero.validate(), Err(RulesError::ZeroPeopleMin));

        let inverted = ProjectRules {
            people_min: 4,
            people_max: 2,
            ..ProjectRules::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(RulesError::EmptyPeopleRange { min: 4, max: 2 })
        );
    }
}
