//! Read-only projections of the session for presentation surfaces.

use serde::Serialize;
use shared::domain::{PatientContext, QuestionResponse};

use crate::copy::NO_RESPONSE_PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionProgress {
    /// 1-based position of the displayed question.
    pub position: usize,
    pub total: usize,
    pub percent: f64,
}

impl QuestionProgress {
    pub fn new(index: usize, total: usize) -> Self {
        let position = index + 1;
        let percent = if total == 0 {
            0.0
        } else {
            position as f64 / total as f64 * 100.0
        };
        Self {
            position,
            total,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub patient: PatientContext,
    pub responses: Vec<QuestionResponse>,
}

impl CompletionSummary {
    pub fn new(patient: PatientContext, responses: Vec<QuestionResponse>) -> Self {
        Self { patient, responses }
    }

    /// Answers as they should be shown, with blanks replaced by a placeholder.
    pub fn display_answers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.responses.iter().map(|response| {
            let answer = if response.answer.is_empty() {
                NO_RESPONSE_PLACEHOLDER
            } else {
                response.answer.as_str()
            };
            (response.question.as_str(), answer)
        })
    }
}
