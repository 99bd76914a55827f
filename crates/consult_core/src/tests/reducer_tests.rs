use shared::domain::{PatientContext, QuestionItem};

use super::*;

fn questions(count: u32) -> Vec<QuestionItem> {
    (1..=count)
        .map(|id| QuestionItem::new(id, format!("question {id}")))
        .collect()
}

fn at_personal_info(count: u32) -> SessionState {
    let mut state = SessionState::with_questions(questions(count));
    assert_eq!(reduce(&mut state, FlowEvent::Consent(true)), Transition::Applied);
    state
}

fn at_first_question(count: u32) -> SessionState {
    let mut state = at_personal_info(count);
    reduce(&mut state, FlowEvent::SetName("Jo".into()));
    reduce(&mut state, FlowEvent::SetGender("Male".into()));
    reduce(&mut state, FlowEvent::SetDob("01/01/2000".into()));
    assert_eq!(
        reduce(&mut state, FlowEvent::ConfirmPersonalInfo),
        Transition::Applied
    );
    state
}

fn answer(state: &mut SessionState, text: &str) -> Transition {
    reduce(state, FlowEvent::SetDraftAnswer(text.into()));
    reduce(state, FlowEvent::Next)
}

#[test]
fn declining_consent_then_restart_resets_session() {
    let mut state = at_first_question(5);
    answer(&mut state, "fever");
    reduce(&mut state, FlowEvent::Back);
    reduce(&mut state, FlowEvent::Back);
    reduce(&mut state, FlowEvent::Back);
    assert_eq!(state.step, Step::Consent);
    let drawn = state.selected_questions.clone();

    reduce(&mut state, FlowEvent::Consent(false));
    assert_eq!(state.step, Step::Denied);
    reduce(&mut state, FlowEvent::Restart);

    assert_eq!(state.step, Step::Consent);
    assert_eq!(state.patient, PatientContext::default());
    assert!(state.responses.iter().all(|r| r.answer.is_empty()));
    assert_eq!(state.selected_questions, drawn);
    assert!(state.draft_answer.is_empty());
    assert!(state.error_message.is_none());
}

#[test]
fn personal_info_surfaces_first_failure_only() {
    let cases = [
        ("", "Male", "01/01/2000", ValidationError::MissingName),
        ("Jo", "", "01/01/2000", ValidationError::MissingGender),
        ("Jo", "Male", "2000-01-01", ValidationError::InvalidDob),
    ];

    for (name, gender, dob, expected) in cases {
        let mut state = at_personal_info(5);
        reduce(&mut state, FlowEvent::SetName(name.into()));
        reduce(&mut state, FlowEvent::SetGender(gender.into()));
        reduce(&mut state, FlowEvent::SetDob(dob.into()));

        let outcome = reduce(&mut state, FlowEvent::ConfirmPersonalInfo);
        assert_eq!(outcome, Transition::Rejected(expected.clone()));
        assert_eq!(state.step, Step::PersonalInfo);
        assert_eq!(state.error_message.as_deref(), Some(expected.to_string().as_str()));
    }
}

#[test]
fn valid_personal_info_enters_first_question() {
    let state = at_first_question(5);
    assert_eq!(state.step, Step::MedicalQuestions);
    assert_eq!(state.current_question_index, 0);
    assert!(state.error_message.is_none());
    assert!(state.draft_answer.is_empty());
}

#[test]
fn next_requires_non_blank_answer() {
    let mut state = at_first_question(5);

    assert_eq!(
        reduce(&mut state, FlowEvent::Next),
        Transition::Rejected(ValidationError::MissingAnswer)
    );
    assert!(state.error_message.is_some());

    assert_eq!(
        answer(&mut state, "  "),
        Transition::Rejected(ValidationError::MissingAnswer)
    );
    assert_eq!(state.current_question_index, 0);
    assert_eq!(state.step, Step::MedicalQuestions);
    assert!(state.responses[0].answer.is_empty());

    assert_eq!(answer(&mut state, "fever"), Transition::Applied);
    assert_eq!(state.responses[0].answer, "fever");
    assert_eq!(state.current_question_index, 1);
    assert!(state.error_message.is_none());
}

#[test]
fn single_question_session_goes_straight_to_saving() {
    let mut state = at_first_question(1);
    match answer(&mut state, " fever ") {
        Transition::BeginSave(payload) => {
            assert_eq!(payload.user_responses.len(), 1);
            assert_eq!(payload.user_responses[0].answer, "fever");
        }
        other => panic!("expected save, got {other:?}"),
    }
    assert_eq!(state.step, Step::Saving);
    assert!(state.is_saving);
}

#[test]
fn back_from_first_question_commits_even_empty_draft() {
    let mut state = at_first_question(5);
    answer(&mut state, "fever");
    reduce(&mut state, FlowEvent::Back);
    assert_eq!(state.current_question_index, 0);
    assert_eq!(state.draft_answer, "fever");

    reduce(&mut state, FlowEvent::SetDraftAnswer(String::new()));
    assert_eq!(reduce(&mut state, FlowEvent::Back), Transition::Applied);
    assert_eq!(state.step, Step::PersonalInfo);
    assert_eq!(state.responses[0].answer, "");
}

#[test]
fn back_keeps_unvalidated_draft_and_reloads_previous() {
    let mut state = at_first_question(5);
    answer(&mut state, "first");
    reduce(&mut state, FlowEvent::SetDraftAnswer("half typed".into()));
    reduce(&mut state, FlowEvent::Back);

    assert_eq!(state.current_question_index, 0);
    assert_eq!(state.draft_answer, "first");
    assert_eq!(state.responses[1].answer, "half typed");

    reduce(&mut state, FlowEvent::Next);
    assert_eq!(state.draft_answer, "half typed");
}

#[test]
fn back_clears_a_pending_error() {
    let mut state = at_first_question(5);
    answer(&mut state, "first");
    reduce(&mut state, FlowEvent::Next);
    assert!(state.error_message.is_some());

    reduce(&mut state, FlowEvent::Back);
    assert!(state.error_message.is_none());
}

#[test]
fn repeated_next_on_reloaded_answer_is_idempotent() {
    let mut state = at_first_question(5);
    answer(&mut state, "fever");
    answer(&mut state, "none");
    reduce(&mut state, FlowEvent::Back);
    reduce(&mut state, FlowEvent::Back);
    let committed = state.responses.clone();

    reduce(&mut state, FlowEvent::Next);
    reduce(&mut state, FlowEvent::Next);

    assert_eq!(state.responses, committed);
    assert_eq!(state.current_question_index, 2);
}

#[test]
fn last_answer_builds_trimmed_payload() {
    let mut state = at_first_question(3);
    answer(&mut state, "  one ");
    answer(&mut state, "two");

    let Transition::BeginSave(payload) = answer(&mut state, "three   ") else {
        panic!("expected save");
    };
    let answers: Vec<&str> = payload
        .user_responses
        .iter()
        .map(|r| r.answer.as_str())
        .collect();
    assert_eq!(answers, ["one", "two", "three"]);
    assert_eq!(payload.patient_context.name, "Jo");
}

#[test]
fn events_outside_their_step_are_ignored() {
    let mut state = SessionState::with_questions(questions(5));
    let before = state.clone();
    for event in [
        FlowEvent::Next,
        FlowEvent::Back,
        FlowEvent::Restart,
        FlowEvent::SetName("x".into()),
        FlowEvent::SetDraftAnswer("x".into()),
        FlowEvent::ConfirmPersonalInfo,
    ] {
        assert_eq!(reduce(&mut state, event), Transition::Ignored);
    }
    assert_eq!(state, before);
}

#[test]
fn saving_step_accepts_nothing() {
    let mut state = at_first_question(1);
    answer(&mut state, "done");
    let before = state.clone();

    for event in [
        FlowEvent::Back,
        FlowEvent::Next,
        FlowEvent::Consent(true),
        FlowEvent::SetDraftAnswer("late".into()),
    ] {
        assert_eq!(reduce(&mut state, event), Transition::Ignored);
    }
    assert_eq!(state, before);
}

#[test]
fn responses_stay_parallel_to_questions() {
    let mut state = at_first_question(5);
    let events = [
        FlowEvent::SetDraftAnswer("a".into()),
        FlowEvent::Next,
        FlowEvent::Back,
        FlowEvent::Next,
        FlowEvent::SetDraftAnswer("b".into()),
        FlowEvent::Next,
        FlowEvent::Back,
        FlowEvent::Back,
        FlowEvent::Back,
    ];
    for event in events {
        reduce(&mut state, event);
        assert_eq!(state.responses.len(), state.selected_questions.len());
        for (response, question) in state.responses.iter().zip(&state.selected_questions) {
            assert_eq!(response.question, question.text);
        }
    }
}
