use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

/// Which view of the wizard is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Consent,
    PersonalInfo,
    MedicalQuestions,
    Saving,
    Complete,
    Denied,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Consent => "consent",
            Step::PersonalInfo => "personal_info",
            Step::MedicalQuestions => "medical_questions",
            Step::Saving => "saving",
            Step::Complete => "complete",
            Step::Denied => "denied",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields collected on the personal info step.
///
/// `dob` is free text expected in `DD/MM/YYYY` form; only its shape is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    pub name: String,
    pub dob: String,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: QuestionId,
    pub text: String,
}

impl QuestionItem {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId(id),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
    pub answer: String,
}

impl QuestionResponse {
    pub fn unanswered(question: &QuestionItem) -> Self {
        Self {
            question: question.text.clone(),
            answer: String::new(),
        }
    }
}
