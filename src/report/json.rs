//! JSON output formatter.
//!
//! Writes the whole run as one machine-readable document for tooling.

use serde::Serialize;
use std::io::Write;

use crate::checks::{CheckResult, Report};

use super::summary::Summary;

/// Formats a report and its summary as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    app_name: Option<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_name: Option<&'a str>,
    results: &'a [CheckResult],
    summary: JsonSummary<'a>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    error_count: usize,
    warning_count: usize,
    #[serde(flatten)]
    detail: &'a Summary,
}

impl JsonFormatter {
    pub fn new(app_name: Option<String>) -> Self {
        Self { app_name }
    }

    /// Write `report` and `summary` to `writer`, followed by a newline.
    pub fn format<W: Write>(
        &self,
        report: &Report,
        summary: &Summary,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            app_name: self.app_name.as_deref(),
            results: report.results(),
            summary: JsonSummary {
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                detail: summary,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
