use rand::Rng;
use shared::{
    domain::{PatientContext, QuestionItem, QuestionResponse, SessionId, Step},
    protocol::ConsultationPayload,
};

use crate::{config::FlowConfig, questions::select_random_questions};

/// Everything one walkthrough of the wizard holds in memory.
///
/// `responses` is created parallel to `selected_questions` and only its
/// answers are ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub session_id: SessionId,
    pub step: Step,
    pub patient: PatientContext,
    pub selected_questions: Vec<QuestionItem>,
    pub current_question_index: usize,
    pub responses: Vec<QuestionResponse>,
    pub draft_answer: String,
    pub error_message: Option<String>,
    pub is_saving: bool,
}

impl SessionState {
    pub fn new<R: Rng + ?Sized>(config: &FlowConfig, rng: &mut R) -> Self {
        let selected_questions =
            select_random_questions(&config.question_pool, config.num_questions, rng);
        Self::with_questions(selected_questions)
    }

    pub fn with_questions(selected_questions: Vec<QuestionItem>) -> Self {
        let responses = selected_questions
            .iter()
            .map(QuestionResponse::unanswered)
            .collect();
        Self {
            session_id: SessionId::new(),
            step: Step::Consent,
            patient: PatientContext::default(),
            selected_questions,
            current_question_index: 0,
            responses,
            draft_answer: String::new(),
            error_message: None,
            is_saving: false,
        }
    }

    /// Back to a blank Consent step. The drawn questions are kept.
    pub fn reset(&mut self) {
        self.step = Step::Consent;
        self.patient = PatientContext::default();
        self.current_question_index = 0;
        for response in &mut self.responses {
            response.answer.clear();
        }
        self.draft_answer.clear();
        self.error_message = None;
        self.is_saving = false;
    }

    pub fn last_index(&self) -> usize {
        self.selected_questions.len().saturating_sub(1)
    }

    pub fn current_question(&self) -> Option<&QuestionItem> {
        self.selected_questions.get(self.current_question_index)
    }

    pub(crate) fn enter_question(&mut self, index: usize) {
        self.step = Step::MedicalQuestions;
        self.current_question_index = index;
        self.draft_answer = self
            .responses
            .get(index)
            .map(|response| response.answer.clone())
            .unwrap_or_default();
        self.error_message = None;
    }

    pub(crate) fn commit_draft(&mut self) {
        if let Some(response) = self.responses.get_mut(self.current_question_index) {
            response.answer = self.draft_answer.clone();
        }
    }

    /// Trimmed answers with the in-flight draft merged at the active index.
    pub fn final_responses(&self) -> Vec<QuestionResponse> {
        self.responses
            .iter()
            .enumerate()
            .map(|(index, response)| {
                let answer = if index == self.current_question_index {
                    self.draft_answer.trim()
                } else {
                    response.answer.trim()
                };
                QuestionResponse {
                    question: response.question.clone(),
                    answer: answer.to_string(),
                }
            })
            .collect()
    }

    pub fn build_payload(&self) -> ConsultationPayload {
        ConsultationPayload {
            patient_context: self.patient.clone(),
            user_responses: self.final_responses(),
        }
    }
}
