use std::sync::Arc;

use anyhow::{Context, Result};
use rand::Rng;
use shared::{
    domain::{QuestionItem, Step},
    protocol::{ConsultationPayload, SaveReceipt},
};
use tracing::{error, info, warn};

use crate::{
    config::{ConfigError, FlowConfig},
    events::FlowEvent,
    persistence::ConsultationStore,
    reducer::{reduce, Transition},
    session::SessionState,
    view::{CompletionSummary, QuestionProgress},
};

/// Drives one patient through consent, identity, screening questions and the
/// final save.
pub struct ConsultationFlowController {
    config: FlowConfig,
    state: SessionState,
    store: Arc<dyn ConsultationStore>,
    receipt: Option<SaveReceipt>,
}

impl ConsultationFlowController {
    pub fn new(config: FlowConfig, store: Arc<dyn ConsultationStore>) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: FlowConfig,
        store: Arc<dyn ConsultationStore>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SessionState::new(&config, rng);
        info!(
            session_id = %state.session_id,
            questions = state.selected_questions.len(),
            "consultation session started"
        );
        Ok(Self {
            config,
            state,
            store,
            receipt: None,
        })
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    pub fn draft_answer(&self) -> &str {
        &self.state.draft_answer
    }

    pub fn current_question(&self) -> Option<&QuestionItem> {
        if self.state.step != Step::MedicalQuestions {
            return None;
        }
        self.state.current_question()
    }

    pub fn progress(&self) -> Option<QuestionProgress> {
        self.current_question().map(|_| {
            QuestionProgress::new(
                self.state.current_question_index,
                self.state.selected_questions.len(),
            )
        })
    }

    pub fn is_first_question(&self) -> bool {
        self.state.current_question_index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_question_index == self.state.last_index()
    }

    pub fn summary(&self) -> Option<CompletionSummary> {
        (self.state.step == Step::Complete).then(|| {
            CompletionSummary::new(self.state.patient.clone(), self.state.responses.clone())
        })
    }

    pub fn receipt(&self) -> Option<&SaveReceipt> {
        self.receipt.as_ref()
    }

    /// Applies one user action. When the action completes the questionnaire
    /// this also performs the save and only returns once the session is
    /// Complete.
    pub async fn dispatch(&mut self, event: FlowEvent) -> Result<Transition> {
        let session_id = self.state.session_id;
        let event_name = event.name();
        let from = self.state.step;

        let transition = reduce(&mut self.state, event);
        match &transition {
            Transition::Rejected(err) => {
                warn!(%session_id, step = %from, field = ?err.field(), "validation failed");
            }
            Transition::BeginSave(payload) => {
                info!(%session_id, from = %from, to = %self.state.step, "step changed");
                self.save(payload).await?;
            }
            Transition::Applied if from != self.state.step => {
                info!(%session_id, event = event_name, from = %from, to = %self.state.step, "step changed");
            }
            Transition::Applied | Transition::Ignored => {}
        }

        Ok(transition)
    }

    async fn save(&mut self, payload: &ConsultationPayload) -> Result<()> {
        let session_id = self.state.session_id;
        info!(%session_id, responses = payload.user_responses.len(), "saving consultation");

        let receipt = match self.store.save(session_id, payload).await {
            Ok(receipt) => receipt,
            Err(err) => {
                error!(%session_id, error = %err, "consultation save failed");
                self.state.is_saving = false;
                return Err(err).context("failed to save consultation");
            }
        };

        self.state.responses = payload.user_responses.clone();
        self.state.draft_answer = self
            .state
            .responses
            .get(self.state.current_question_index)
            .map(|response| response.answer.clone())
            .unwrap_or_default();
        self.state.is_saving = false;
        self.state.step = Step::Complete;
        self.receipt = Some(receipt);
        info!(%session_id, from = %Step::Saving, to = %Step::Complete, "step changed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
