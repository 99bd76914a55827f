//! Step state machine and answer bookkeeping for the pre-consultation intake
//! wizard.

pub mod config;
mod controller;
pub mod copy;
pub mod events;
pub mod persistence;
pub mod questions;
pub mod reducer;
pub mod session;
pub mod validation;
pub mod view;

pub use config::{default_question_pool, ConfigError, FlowConfig};
pub use controller::ConsultationFlowController;
pub use events::FlowEvent;
pub use persistence::{ConsultationStore, SimulatedConsultationStore};
pub use reducer::{reduce, Transition};
pub use session::SessionState;
pub use view::{CompletionSummary, QuestionProgress};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
