//! Result presentation for the CLI.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::output::{format_count, format_duration, format_result};
use crate::ui;

/// One named output of an evaluation (`result`, `quotient`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A finished evaluation ready to be shown.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub operation: String,
    pub operands: Vec<String>,
    pub results: Vec<NamedValue>,
    #[serde(skip)]
    pub duration: Duration,
}

/// Renders evaluations and errors.
pub trait ResultPresenter {
    /// Write `evaluation` to `out`.
    fn present_result(&self, evaluation: &Evaluation, out: &mut dyn Write) -> io::Result<()>;

    /// Report an error to the user.
    fn present_error(&self, error: &str);
}

/// Plain-text, quiet or JSON presentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, evaluation: &Evaluation, out: &mut dyn Write) -> io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, evaluation)?;
            return writeln!(out);
        }

        if self.quiet {
            for result in &evaluation.results {
                writeln!(out, "{}", result.value)?;
            }
            return Ok(());
        }

        if self.verbose {
            writeln!(out, "{}", ui::header(&evaluation.operation))?;
        }
        writeln!(
            out,
            "{} {}",
            ui::label("Operation"),
            evaluation.operation
        )?;
        if !evaluation.operands.is_empty() {
            writeln!(
                out,
                "{} {}",
                ui::label("Operands"),
                evaluation.operands.join(", ")
            )?;
        }
        if self.verbose {
            writeln!(
                out,
                "{} {}",
                ui::label("Duration"),
                format_duration(evaluation.duration)
            )?;
        }
        for result in &evaluation.results {
            writeln!(
                out,
                "{} = {}",
                result.name,
                format_result(&result.value, self.verbose)
            )?;
            if self.verbose {
                let digits = result.value.trim_start_matches('-').len();
                writeln!(out, "  {} {}", ui::label("digits"), format_count(digits))?;
            }
        }
        Ok(())
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
