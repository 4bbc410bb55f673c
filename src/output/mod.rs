//! Output formatting for facts results.
//!
//! - [`json`] - JSON envelope and failure report on stdout

mod json;

pub use json::{print_envelope, print_failure, render, FailureReport};
