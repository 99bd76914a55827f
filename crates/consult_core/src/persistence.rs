use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use shared::{
    domain::SessionId,
    protocol::{ConsultationPayload, SaveReceipt},
};
use tokio::sync::Mutex;
use tracing::info;

/// Where a finished consultation is written. Treated as an opaque write.
#[async_trait]
pub trait ConsultationStore: Send + Sync {
    async fn save(
        &self,
        session_id: SessionId,
        payload: &ConsultationPayload,
    ) -> Result<SaveReceipt>;
}

/// Stands in for the backend: waits a fixed latency, then accepts the write
/// and keeps a copy in memory.
pub struct SimulatedConsultationStore {
    latency: Duration,
    saved: Mutex<Vec<(SessionId, ConsultationPayload)>>,
}

impl SimulatedConsultationStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub async fn saved_payloads(&self) -> Vec<(SessionId, ConsultationPayload)> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl ConsultationStore for SimulatedConsultationStore {
    async fn save(
        &self,
        session_id: SessionId,
        payload: &ConsultationPayload,
    ) -> Result<SaveReceipt> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.saved.lock().await.push((session_id, payload.clone()));
        let receipt = SaveReceipt {
            session_id,
            saved_at: Utc::now(),
            response_count: payload.user_responses.len(),
        };
        info!(%session_id, responses = receipt.response_count, "consultation stored");
        Ok(receipt)
    }
}
