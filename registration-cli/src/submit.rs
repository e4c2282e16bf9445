use std::io::Write;

use anyhow::Result;
use clap::Args;
use registration_form::{RawSubmission, SubmitOutcome};
use tracing::info;

use crate::output::{render_outcome, render_table, separator, SubmitReport};
use crate::FormArgs;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Full name, at least two words
    #[arg(long, default_value = "")]
    pub full_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number: digits, spaces, dashes and an optional leading +
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Birth date as YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birth_date: String,

    /// Tick the terms checkbox
    #[arg(long, default_value = "false")]
    pub accept_terms: bool,

    #[command(flatten)]
    pub form: FormArgs,
}

impl SubmitArgs {
    pub fn to_raw_submission(&self) -> RawSubmission {
        RawSubmission {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            accepted_terms: self.accept_terms,
        }
    }
}

/// Submit one form and write the result to `out`.
///
/// Returns whether the submission was accepted.
pub fn run_submit(args: SubmitArgs, out: &mut impl Write) -> Result<bool> {
    let mut session = args.form.build_session()?;
    info!("Submitting form at {}", session.timestamp());

    let outcome = session.submit(args.to_raw_submission());
    let accepted = outcome.is_accepted();

    if args.form.json {
        let report = SubmitReport::from_session(&session, outcome.record().cloned());
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(accepted);
    }

    match outcome {
        SubmitOutcome::Accepted(_) => {
            writeln!(out, "✓ Submission accepted")?;
            writeln!(out, "{}", separator())?;
            writeln!(out, "{}", render_table(session.records()))?;
        }
        SubmitOutcome::Rejected(validation) => {
            writeln!(
                out,
                "✗ Submission rejected ({} invalid field(s))",
                validation.error_count()
            )?;
            writeln!(out, "{}", render_outcome(&validation))?;
            if let Some(focus) = session.focus() {
                writeln!(out, "Focus: {}", focus)?;
            }
        }
    }

    Ok(accepted)
}
