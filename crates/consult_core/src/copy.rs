//! Patient-facing text for each step.

pub const CONSENT_PROMPT: &str =
    "I would like to ask you some questions before you visit the doctor. Do you agree?";
pub const DENIED_MESSAGE: &str = "I understand. Please let me know when you're ready to begin.";
pub const PERSONAL_INFO_INTRO: &str = "Please provide the following details:";
pub const NAME_LABEL: &str = "What is your name?";
pub const DOB_LABEL: &str = "What is your Date of birth (DD/MM/YYYY)?";
pub const DOB_PLACEHOLDER: &str = "e.g., 25/12/1990";
pub const GENDER_LABEL: &str = "What is your gender?";
pub const SAVING_MESSAGE: &str = "Processing and securely saving your responses...";
pub const COMPLETE_MESSAGE: &str = "Thank you for your information. Your responses have been securely stored and will be reviewed by your doctor.";
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response provided";

/// Choices offered for gender. Validation only requires a non-blank value.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Prefer not to say"];
