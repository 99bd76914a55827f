//! Step transitions over a single [`SessionState`].

use shared::{domain::Step, error::ValidationError, protocol::ConsultationPayload};
use tracing::debug;

use crate::{
    events::FlowEvent,
    session::SessionState,
    validation::{validate_answer, validate_personal_info},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The guard failed; the message is already in `error_message`.
    Rejected(ValidationError),
    /// The event has no meaning in the current step and changed nothing.
    Ignored,
    /// The last answer was accepted and the session is now in Saving.
    BeginSave(ConsultationPayload),
}

pub fn reduce(state: &mut SessionState, event: FlowEvent) -> Transition {
    match (state.step, event) {
        (Step::Consent, FlowEvent::Consent(agreed)) => {
            state.error_message = None;
            state.step = if agreed {
                Step::PersonalInfo
            } else {
                Step::Denied
            };
            Transition::Applied
        }
        (Step::Denied, FlowEvent::Restart) => {
            state.reset();
            Transition::Applied
        }
        (Step::PersonalInfo, FlowEvent::SetName(name)) => {
            state.patient.name = name;
            Transition::Applied
        }
        (Step::PersonalInfo, FlowEvent::SetDob(dob)) => {
            state.patient.dob = dob;
            Transition::Applied
        }
        (Step::PersonalInfo, FlowEvent::SetGender(gender)) => {
            state.patient.gender = gender;
            Transition::Applied
        }
        (Step::PersonalInfo, FlowEvent::ConfirmPersonalInfo) => {
            if let Err(err) = validate_personal_info(&state.patient) {
                return reject(state, err);
            }
            state.enter_question(0);
            Transition::Applied
        }
        (Step::PersonalInfo, FlowEvent::Back) => {
            state.error_message = None;
            state.step = Step::Consent;
            Transition::Applied
        }
        (Step::MedicalQuestions, FlowEvent::SetDraftAnswer(draft)) => {
            state.draft_answer = draft;
            Transition::Applied
        }
        (Step::MedicalQuestions, FlowEvent::Next) => next_question(state),
        (Step::MedicalQuestions, FlowEvent::Back) => previous_question(state),
        (step, event) => {
            debug!(step = %step, event = event.name(), "event ignored in current step");
            Transition::Ignored
        }
    }
}

fn next_question(state: &mut SessionState) -> Transition {
    if let Err(err) = validate_answer(&state.draft_answer) {
        return reject(state, err);
    }
    state.error_message = None;
    state.commit_draft();
    debug!(index = state.current_question_index, "committed answer");

    if state.current_question_index >= state.last_index() {
        state.step = Step::Saving;
        state.is_saving = true;
        return Transition::BeginSave(state.build_payload());
    }

    state.enter_question(state.current_question_index + 1);
    Transition::Applied
}

fn previous_question(state: &mut SessionState) -> Transition {
    state.commit_draft();

    if state.current_question_index > 0 {
        state.enter_question(state.current_question_index - 1);
    } else {
        state.error_message = None;
        state.step = Step::PersonalInfo;
    }
    Transition::Applied
}

fn reject(state: &mut SessionState, err: ValidationError) -> Transition {
    state.error_message = Some(err.to_string());
    Transition::Rejected(err)
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
