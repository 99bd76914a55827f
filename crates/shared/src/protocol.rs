use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{PatientContext, QuestionResponse, SessionId};

/// The write handed to persistence once every question has an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationPayload {
    pub patient_context: PatientContext,
    pub user_responses: Vec<QuestionResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub session_id: SessionId,
    pub saved_at: DateTime<Utc>,
    pub response_count: usize,
}
