//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and capturing their output.

use crate::config::MAX_CLI_OUTPUT_BYTES;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;
use thiserror::Error;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("empty command")]
    Empty,

    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero. `stderr` is kept for classification.
    #[error("ERROR running: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Response too large: {size} bytes for command: {cmd}")]
    TooLarge { size: usize, cmd: String },

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Run a command line and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
///
/// # Arguments
/// * `cmd` - The command string to execute
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(CliError::Failed)` - Non-zero exit, carrying stderr
/// * `Err` - If the command cannot start or produces too much output
pub fn run(cmd: &str) -> Result<String, CliError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds.split_first().ok_or(CliError::Empty)?;

    // Build command and add args
    let mut command = Command::new(program);
    command.args(args);

    let output = command.output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        CliError::Spawn {
            program: program.to_string(),
            source: e,
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(CliError::Failed {
            code: output.status.code(),
            stderr,
        });
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    check_output_size(output.stdout.len(), MAX_CLI_OUTPUT_BYTES, cmd)?;

    Ok(String::from_utf8(output.stdout)?)
}

/// Reject stdout larger than `limit` bytes.
fn check_output_size(size: usize, limit: usize, cmd: &str) -> Result<(), CliError> {
    if size > limit {
        return Err(CliError::TooLarge {
            size,
            cmd: cmd.to_string(),
        });
    }
    Ok(())
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}
