use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    Name,
    Gender,
    DateOfBirth,
    Answer,
}

/// A guard that blocked a forward transition. The display text is what the
/// patient sees in the error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,
    #[error("Gender is required. Please select an option.")]
    MissingGender,
    #[error("Date of Birth must be in DD/MM/YYYY format (e.g., 25/12/1990).")]
    InvalidDob,
    #[error("Please provide an answer to continue.")]
    MissingAnswer,
}

impl ValidationError {
    pub fn field(&self) -> ValidationField {
        match self {
            ValidationError::MissingName => ValidationField::Name,
            ValidationError::MissingGender => ValidationField::Gender,
            ValidationError::InvalidDob => ValidationField::DateOfBirth,
            ValidationError::MissingAnswer => ValidationField::Answer,
        }
    }
}
