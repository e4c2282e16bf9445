//! Replay a scripted sequence of submit and reset events through one form

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use registration_form::{RawSubmission, SubmitOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::output::{render_outcome, render_table, separator, SubmitReport};
use crate::FormArgs;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// JSON lines file; each line is {"action":"submit", ...fields} or {"action":"reset"}
    pub script: PathBuf,

    #[command(flatten)]
    pub form: FormArgs,
}

/// One user action against the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayEvent {
    Submit(RawSubmission),
    Reset,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub accepted: usize,
    pub rejected: usize,
    pub resets: usize,
}

/// Parse a script, skipping blank lines and `#` comments
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ReplayEvent>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read script line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: ReplayEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("Invalid event on script line {}", index + 1))?;
        events.push(event);
    }
    Ok(events)
}

pub fn run_replay(args: ReplayArgs, out: &mut impl Write) -> Result<ReplaySummary> {
    let file = std::fs::File::open(&args.script)
        .with_context(|| format!("Failed to open script: {}", args.script.display()))?;
    let events = parse_script(BufReader::new(file))?;
    info!("Replaying {} event(s) from {}", events.len(), args.script.display());

    let mut session = args.form.build_session()?;
    let mut summary = ReplaySummary::default();
    let mut reports = Vec::new();

    for (index, event) in events.into_iter().enumerate() {
        debug!("Event {}: {:?}", index + 1, event);
        match event {
            ReplayEvent::Submit(raw) => {
                let outcome = session.submit(raw);
                if args.form.json {
                    reports.push(SubmitReport::from_session(&session, outcome.record().cloned()));
                }
                match outcome {
                    SubmitOutcome::Accepted(record) => {
                        summary.accepted += 1;
                        if !args.form.json {
                            writeln!(out, "[{}] ✓ accepted {}", index + 1, record.full_name)?;
                        }
                    }
                    SubmitOutcome::Rejected(validation) => {
                        summary.rejected += 1;
                        if !args.form.json {
                            writeln!(
                                out,
                                "[{}] ✗ rejected ({} invalid field(s))",
                                index + 1,
                                validation.error_count()
                            )?;
                            writeln!(out, "{}", render_outcome(&validation))?;
                        }
                    }
                }
            }
            ReplayEvent::Reset => {
                session.reset();
                summary.resets += 1;
                if !args.form.json {
                    writeln!(out, "[{}] form reset", index + 1)?;
                }
            }
        }
    }

    if args.form.json {
        let document = serde_json::json!({
            "events": reports,
            "summary": summary,
            "records": session.records(),
        });
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", separator())?;
        writeln!(
            out,
            "Accepted: {}  Rejected: {}  Resets: {}",
            summary.accepted, summary.rejected, summary.resets
        )?;
        writeln!(out, "{}", render_table(session.records()))?;
    }

    Ok(summary)
}
