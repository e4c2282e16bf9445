pub mod output;
pub mod replay;
pub mod submit;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use registration_form::{Clock, FixedClock, FormSession, RegistrationConfig, SystemClock};

pub use replay::{run_replay, ReplayArgs, ReplayEvent, ReplaySummary};
pub use submit::{run_submit, SubmitArgs};

/// Options shared by every command that drives a form session
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// JSON file with registration limits; missing keys keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pin the clock to this local time ("YYYY-MM-DD HH:MM:SS") instead of reading the system clock
    #[arg(long)]
    pub now: Option<String>,

    /// Print machine readable JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

impl FormArgs {
    /// Build a form session from the configured limits and clock
    pub fn build_session(&self) -> Result<FormSession> {
        let config = load_config(self.config.as_deref())?;
        let clock = build_clock(self.now.as_deref())?;
        FormSession::new(config, clock).context("Failed to create form session")
    }
}

/// Load limits from a JSON file, or the defaults when no file is given
pub fn load_config(path: Option<&Path>) -> Result<RegistrationConfig> {
    let Some(path) = path else {
        return Ok(RegistrationConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: RegistrationConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

pub fn build_clock(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(value) => {
            let clock = FixedClock::parse(value).with_context(|| {
                format!(
                    "Invalid --now value: {}. Expected format YYYY-MM-DD HH:MM:SS",
                    value
                )
            })?;
            Ok(Box::new(clock))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Whether an error came from bad arguments or configuration rather than
/// from running the command
pub fn is_usage_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause.is::<registration_form::ConfigError>()
            || cause.is::<chrono::ParseError>()
            || cause.is::<serde_json::Error>()
    })
}
