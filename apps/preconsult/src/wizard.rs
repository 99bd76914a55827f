//! Line-oriented terminal front-end for the intake flow.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use consult_core::{
    copy::{
        COMPLETE_MESSAGE, CONSENT_PROMPT, DENIED_MESSAGE, DOB_LABEL, DOB_PLACEHOLDER,
        GENDER_LABEL, GENDER_OPTIONS, NAME_LABEL, PERSONAL_INFO_INTRO, SAVING_MESSAGE,
    },
    ConsultationFlowController, FlowEvent, Transition,
};
use shared::{domain::Step, protocol::ConsultationPayload};
use tracing::info;

const BACK_COMMAND: &str = "/back";
const QUIT_COMMAND: &str = "/quit";

enum Reply {
    Text(String),
    Back,
    Quit,
}

enum Flow {
    Continue,
    Finished(ConsultationPayload),
    Stop,
}

pub struct Wizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs until the consultation is saved, or the patient quits or closes
    /// input. Returns the saved payload when there is one.
    pub async fn run(
        &mut self,
        controller: &mut ConsultationFlowController,
    ) -> Result<Option<ConsultationPayload>> {
        loop {
            let flow = match controller.step() {
                Step::Consent => self.consent(controller).await?,
                Step::Denied => self.denied(controller).await?,
                Step::PersonalInfo => self.personal_info(controller).await?,
                Step::MedicalQuestions => self.medical_question(controller).await?,
                Step::Saving => bail!("consultation save did not complete"),
                Step::Complete => Flow::Stop,
            };

            match flow {
                Flow::Continue => {}
                Flow::Finished(payload) => {
                    self.render_summary(controller)?;
                    return Ok(Some(payload));
                }
                Flow::Stop => {
                    info!(step = %controller.step(), "wizard stopped before completion");
                    return Ok(None);
                }
            }
        }
    }

    async fn consent(&mut self, controller: &mut ConsultationFlowController) -> Result<Flow> {
        writeln!(self.output, "PreConsult: {CONSENT_PROMPT} [y/n]")?;
        match self.read_reply()? {
            Reply::Text(text) => match text.to_ascii_lowercase().as_str() {
                "y" | "yes" => {
                    controller.dispatch(FlowEvent::Consent(true)).await?;
                }
                "n" | "no" => {
                    controller.dispatch(FlowEvent::Consent(false)).await?;
                }
                _ => writeln!(self.output, "Please answer y or n.")?,
            },
            Reply::Back => {}
            Reply::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    async fn denied(&mut self, controller: &mut ConsultationFlowController) -> Result<Flow> {
        writeln!(self.output, "{DENIED_MESSAGE}")?;
        writeln!(
            self.output,
            "Type 'restart' to begin again, or {QUIT_COMMAND} to leave."
        )?;
        match self.read_reply()? {
            Reply::Text(text) if text.eq_ignore_ascii_case("restart") => {
                controller.dispatch(FlowEvent::Restart).await?;
            }
            Reply::Quit => return Ok(Flow::Stop),
            Reply::Text(_) | Reply::Back => {}
        }
        Ok(Flow::Continue)
    }

    async fn personal_info(&mut self, controller: &mut ConsultationFlowController) -> Result<Flow> {
        writeln!(self.output, "Personal Information")?;
        writeln!(self.output, "{PERSONAL_INFO_INTRO}")?;

        let current = controller.state().patient.clone();
        let name = match self.ask_field(NAME_LABEL, &current.name)? {
            Reply::Text(name) => name,
            Reply::Back => return self.back(controller).await,
            Reply::Quit => return Ok(Flow::Stop),
        };
        controller.dispatch(FlowEvent::SetName(name)).await?;

        let dob_label = format!("{DOB_LABEL} ({DOB_PLACEHOLDER})");
        let dob = match self.ask_field(&dob_label, &current.dob)? {
            Reply::Text(dob) => dob,
            Reply::Back => return self.back(controller).await,
            Reply::Quit => return Ok(Flow::Stop),
        };
        controller.dispatch(FlowEvent::SetDob(dob)).await?;

        writeln!(self.output, "{GENDER_LABEL}")?;
        for (n, option) in GENDER_OPTIONS.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", n + 1)?;
        }
        let gender = match self.ask_field("Select an option", &current.gender)? {
            Reply::Text(choice) => gender_from_choice(&choice),
            Reply::Back => return self.back(controller).await,
            Reply::Quit => return Ok(Flow::Stop),
        };
        controller.dispatch(FlowEvent::SetGender(gender)).await?;

        if let Transition::Rejected(err) =
            controller.dispatch(FlowEvent::ConfirmPersonalInfo).await?
        {
            writeln!(self.output, "Error: {err}")?;
        }
        Ok(Flow::Continue)
    }

    async fn medical_question(
        &mut self,
        controller: &mut ConsultationFlowController,
    ) -> Result<Flow> {
        let (Some(question), Some(progress)) =
            (controller.current_question().cloned(), controller.progress())
        else {
            bail!("no question is active");
        };

        writeln!(
            self.output,
            "Question {} of {} ({:.0}%)",
            progress.position, progress.total, progress.percent
        )?;
        writeln!(self.output, "{}", question.text)?;

        let draft = controller.draft_answer().to_string();
        let answer = match self.ask_field("Your response", &draft)? {
            Reply::Text(answer) => answer,
            Reply::Back => return self.back(controller).await,
            Reply::Quit => return Ok(Flow::Stop),
        };
        controller.dispatch(FlowEvent::SetDraftAnswer(answer)).await?;

        if controller.is_last_question() && !controller.draft_answer().trim().is_empty() {
            writeln!(self.output, "{SAVING_MESSAGE}")?;
        }
        match controller.dispatch(FlowEvent::Next).await? {
            Transition::BeginSave(payload) => Ok(Flow::Finished(payload)),
            Transition::Rejected(err) => {
                writeln!(self.output, "Error: {err}")?;
                Ok(Flow::Continue)
            }
            Transition::Applied | Transition::Ignored => Ok(Flow::Continue),
        }
    }

    async fn back(&mut self, controller: &mut ConsultationFlowController) -> Result<Flow> {
        controller.dispatch(FlowEvent::Back).await?;
        Ok(Flow::Continue)
    }

    /// Prompts for one value. An empty line keeps `current` when it is set.
    fn ask_field(&mut self, label: &str, current: &str) -> Result<Reply> {
        if current.is_empty() {
            writeln!(self.output, "{label}:")?;
        } else {
            writeln!(self.output, "{label} [{current}]:")?;
        }
        Ok(match self.read_reply()? {
            Reply::Text(text) if text.is_empty() => Reply::Text(current.to_string()),
            reply => reply,
        })
    }

    fn read_reply(&mut self) -> Result<Reply> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(Reply::Quit);
        }

        let line = line.trim_end_matches(['\r', '\n']);
        Ok(match line.trim() {
            BACK_COMMAND => Reply::Back,
            QUIT_COMMAND => Reply::Quit,
            _ => Reply::Text(line.to_string()),
        })
    }

    fn render_summary(&mut self, controller: &ConsultationFlowController) -> Result<()> {
        let Some(summary) = controller.summary() else {
            return Ok(());
        };

        writeln!(self.output, "Consultation Complete!")?;
        writeln!(self.output, "{COMPLETE_MESSAGE}")?;
        writeln!(self.output, "Name: {}", summary.patient.name)?;
        writeln!(self.output, "DOB: {}", summary.patient.dob)?;
        writeln!(self.output, "Gender: {}", summary.patient.gender)?;
        writeln!(
            self.output,
            "Medical Responses ({} Questions)",
            summary.responses.len()
        )?;
        for (n, (question, answer)) in summary.display_answers().enumerate() {
            writeln!(self.output, "Q{}: {question}", n + 1)?;
            writeln!(self.output, "  A: {answer}")?;
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Accepts either the option number or free text.
fn gender_from_choice(choice: &str) -> String {
    choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| GENDER_OPTIONS.get(index))
        .map(|option| option.to_string())
        .unwrap_or_else(|| choice.to_string())
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
