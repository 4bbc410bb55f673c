//! JSON rendering of results and failures.

use crate::error::FactsError;
use crate::models::ResultEnvelope;
use serde::Serialize;
use std::io::Write;

/// What the caller sees when a query fails. Never carries results.
#[derive(Serialize, Debug)]
pub struct FailureReport {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl From<&FactsError> for FailureReport {
    fn from(err: &FactsError) -> Self {
        FailureReport {
            failed: true,
            changed: false,
            msg: err.to_string(),
        }
    }
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn print_envelope(envelope: &ResultEnvelope, pretty: bool) -> std::io::Result<()> {
    log::info!("Returning {} result(s)", envelope.results.len());
    write_line(&render(envelope, pretty)?)
}

pub fn print_failure(err: &FactsError, pretty: bool) -> std::io::Result<()> {
    write_line(&render(&FailureReport::from(err), pretty)?)
}

fn write_line(json: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()
}
