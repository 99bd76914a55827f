use std::time::Duration;

use shared::domain::QuestionItem;
use thiserror::Error;

pub const DEFAULT_NUM_QUESTIONS: usize = 5;
pub const DEFAULT_SAVE_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("num_questions must be at least 1")]
    ZeroQuestions,
    #[error("question pool is empty")]
    EmptyPool,
}

/// Inputs fixed for the lifetime of a controller.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub num_questions: usize,
    pub question_pool: Vec<QuestionItem>,
    pub save_latency: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_NUM_QUESTIONS,
            question_pool: default_question_pool(),
            save_latency: DEFAULT_SAVE_LATENCY,
        }
    }
}

impl FlowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_questions == 0 {
            return Err(ConfigError::ZeroQuestions);
        }
        if self.question_pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }

    pub fn with_num_questions(mut self, num_questions: usize) -> Self {
        self.num_questions = num_questions;
        self
    }

    pub fn with_save_latency(mut self, save_latency: Duration) -> Self {
        self.save_latency = save_latency;
        self
    }
}

pub fn default_question_pool() -> Vec<QuestionItem> {
    [
        "Do you have any known allergies to medications, food, or environmental factors?",
        "Please describe your main symptom and when it started.",
        "Have you experienced fever or chills in the last 48 hours?",
        "Are you currently taking any prescription medications, over-the-counter drugs, or supplements?",
        "Have you recently traveled outside the country or been in contact with anyone who has been sick?",
        "On a scale of 1 to 10 (1 being minimal, 10 being severe), how would you rate your current pain level?",
        "Do you have a history of chronic conditions like diabetes, high blood pressure, or heart disease?",
        "Have you had any recent surgeries or hospitalizations?",
        "Do you smoke or consume alcohol regularly?",
        "Are you pregnant or is there any chance you might be?",
    ]
    .into_iter()
    .zip(1u32..)
    .map(|(text, id)| QuestionItem::new(id, text))
    .collect()
}
