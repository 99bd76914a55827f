use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use consult_core::{ConsultationFlowController, SimulatedConsultationStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod wizard;

use config::{load_settings, DEFAULT_CONFIG_PATH};
use wizard::Wizard;

#[derive(Parser, Debug)]
#[command(about = "Pre-consultation intake questionnaire")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    num_questions: Option<usize>,
    #[arg(long)]
    save_latency_ms: Option<u64>,
    /// Print the saved payload as JSON once the consultation completes.
    #[arg(long)]
    print_payload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(v) = args.num_questions {
        settings.num_questions = v;
    }
    if let Some(v) = args.save_latency_ms {
        settings.save_latency_ms = v;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let flow = settings.flow_config();
    let store = Arc::new(SimulatedConsultationStore::new(flow.save_latency));
    let mut controller = ConsultationFlowController::new(flow, store)
        .context("invalid questionnaire settings")?;

    let stdin = io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), io::stdout());
    let Some(payload) = wizard.run(&mut controller).await? else {
        info!("consultation not completed");
        return Ok(());
    };

    if args.print_payload {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}
