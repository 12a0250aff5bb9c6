//! Field validator.
//!
//! A [`Validatable`] pairs one value with the constraints that apply to it.
//! Length constraints only look at text values and range constraints only
//! look at numbers; a constraint of the wrong kind is skipped.

use std::fmt::{Display, Formatter};

/// Raw field value as entered in a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Validation descriptor: one value plus its optional constraints.
///
/// Unset constraints are vacuously satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    /// Character count lower bound, text only, inclusive.
    pub min_length: Option<usize>,
    /// Character count upper bound, text only, inclusive.
    pub max_length: Option<usize>,
    /// Numeric lower bound, numbers only, inclusive.
    pub min: Option<f64>,
    /// Numeric upper bound, numbers only, inclusive.
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a descriptor with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input.value` satisfies every constraint set on `input`.
///
/// Rules:
/// - `required`: the value's string form, trimmed, is not empty.
/// - `min_length`/`max_length`: text only, untrimmed character count.
/// - `min`/`max`: numbers only. `NaN` fails any set bound.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid &= !input.value.to_string().trim().is_empty();
    }

    match &input.value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if let Some(min_length) = input.min_length {
                is_valid &= length >= min_length;
            }
            if let Some(max_length) = input.max_length {
                is_valid &= length <= max_length;
            }
        }
        FieldValue::Number(number) => {
            if let Some(min) = input.min {
                is_valid &= *number >= min;
            }
            if let Some(max) = input.max {
                is_valid &= *number <= max;
            }
        }
    }

    is_valid
}
