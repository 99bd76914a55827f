//! Guards for the two forward transitions that take free text.

use shared::{domain::PatientContext, error::ValidationError};

/// Checks name, gender and date of birth in that order and reports the first
/// failure only.
pub fn validate_personal_info(patient: &PatientContext) -> Result<(), ValidationError> {
    if patient.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if patient.gender.trim().is_empty() {
        return Err(ValidationError::MissingGender);
    }
    if !is_dob_shaped(&patient.dob) {
        return Err(ValidationError::InvalidDob);
    }
    Ok(())
}

pub fn validate_answer(draft: &str) -> Result<(), ValidationError> {
    if draft.trim().is_empty() {
        return Err(ValidationError::MissingAnswer);
    }
    Ok(())
}

/// `DD/MM/YYYY` by shape only: "31/02/9999" passes.
pub fn is_dob_shaped(dob: &str) -> bool {
    let bytes = dob.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}
