//! User actions fed into the flow controller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Consent(bool),
    Restart,
    SetName(String),
    SetDob(String),
    SetGender(String),
    ConfirmPersonalInfo,
    SetDraftAnswer(String),
    Next,
    Back,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::Consent(_) => "consent",
            FlowEvent::Restart => "restart",
            FlowEvent::SetName(_) => "set_name",
            FlowEvent::SetDob(_) => "set_dob",
            FlowEvent::SetGender(_) => "set_gender",
            FlowEvent::ConfirmPersonalInfo => "confirm_personal_info",
            FlowEvent::SetDraftAnswer(_) => "set_draft_answer",
            FlowEvent::Next => "next",
            FlowEvent::Back => "back",
        }
    }
}
