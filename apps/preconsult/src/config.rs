use std::{fs, path::Path, time::Duration};

use consult_core::FlowConfig;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "preconsult.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub num_questions: usize,
    pub save_latency_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_questions: consult_core::config::DEFAULT_NUM_QUESTIONS,
            save_latency_ms: consult_core::config::DEFAULT_SAVE_LATENCY.as_millis() as u64,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    num_questions: Option<usize>,
    save_latency_ms: Option<u64>,
    log_filter: Option<String>,
}

impl Settings {
    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig::default()
            .with_num_questions(self.num_questions)
            .with_save_latency(Duration::from_millis(self.save_latency_ms))
    }

    fn apply_file(&mut self, raw: &str) {
        let file_cfg = match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => file_cfg,
            Err(error) => {
                warn!(%error, "ignoring unreadable settings file");
                return;
            }
        };

        if let Some(v) = file_cfg.num_questions {
            self.num_questions = v;
        }
        if let Some(v) = file_cfg.save_latency_ms {
            self.save_latency_ms = v;
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in ["PRECONSULT_NUM_QUESTIONS", "APP__NUM_QUESTIONS"] {
            if let Some(parsed) = lookup(key).and_then(|v| v.parse::<usize>().ok()) {
                self.num_questions = parsed;
            }
        }

        if let Some(parsed) = lookup("APP__SAVE_LATENCY_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.save_latency_ms = parsed;
        }

        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
    }
}

/// Defaults, then the settings file if it exists, then the environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file(&raw);
    }
    settings.apply_env(|key| std::env::var(key).ok());

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
