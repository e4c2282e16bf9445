//! Text and JSON rendering for command output

use serde::Serialize;

use registration_form::{AcceptedRecord, FieldId, FieldReport, FormSession, FormState, ValidationOutcome};

const SEPARATOR_WIDTH: usize = 60;
const HEADERS: [&str; 5] = ["Timestamp", "Full name", "Email", "Phone", "Birth date"];

/// JSON shape of one submit attempt
#[derive(Debug, Serialize)]
pub struct SubmitReport {
    pub accepted: bool,
    pub state: FormState,
    pub focus: Option<FieldId>,
    pub timestamp: String,
    pub fields: Vec<FieldReport>,
    pub record: Option<AcceptedRecord>,
}

impl SubmitReport {
    pub fn from_session(session: &FormSession, record: Option<AcceptedRecord>) -> Self {
        Self {
            accepted: record.is_some(),
            state: session.state(),
            focus: session.focus(),
            timestamp: session.timestamp().to_string(),
            fields: session.errors().iter().map(FieldReport::from).collect(),
            record,
        }
    }
}

/// One status line per field, failing fields with their message
pub fn render_outcome(outcome: &ValidationOutcome) -> String {
    let mut lines = Vec::with_capacity(outcome.results().len());
    for result in outcome.results() {
        if result.is_invalid() {
            lines.push(format!("  ✗ {}: {}", result.field, result.message()));
        } else {
            lines.push(format!("  ✓ {}", result.field));
        }
    }
    lines.join("\n")
}

/// Render the accepted records as an aligned text table
pub fn render_table(records: &[AcceptedRecord]) -> String {
    let mut widths = HEADERS.map(str::len);
    for record in records {
        for (width, cell) in widths.iter_mut().zip(record.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        render_row(HEADERS),
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];
    lines.extend(records.iter().map(|record| render_row(record.cells())));
    lines.join("\n")
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
