// src/presentation.rs
use std::io::Write;

use log_tally_domain::{RankedMessage, SeverityFrequency, Summary, timestamp::format_timestamp};
use log_tally_shared_kernel::{EntryCount, PresentationResult};
use log_tally_usecase::{AnalysisReport, FileOutcome};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render `report` to `out` in the requested format.
///
/// # Errors
///
/// Fails when serialisation or the underlying writer fails.
pub fn render<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    format: OutputFormat,
    per_file: bool,
) -> PresentationResult<()> {
    match format {
        OutputFormat::Text => write_text(out, report, per_file),
        OutputFormat::Json => write_json(out, report, per_file),
    }
}

fn write_text<W: Write>(out: &mut W, report: &AnalysisReport, per_file: bool) -> PresentationResult<()> {
    if per_file {
        for file in &report.files {
            writeln!(out, "== {} ==", file.path.display())?;
            match &file.read_error {
                Some(err) => writeln!(out, "   unreadable: {err}")?,
                None => write_summary(out, &file.summary)?,
            }
            writeln!(out)?;
        }
        writeln!(out, "== all files ==")?;
    }
    write_summary(out, &report.global)
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> PresentationResult<()> {
    writeln!(out, "Number of Entries: {}", summary.entries)?;
    writeln!(out, "Log Severity Frequency:")?;
    for (severity, count) in summary.severities.iter() {
        writeln!(out, "   {severity}: {count}")?;
    }
    writeln!(out, "Top Five Log Messages:")?;
    for (rank, slot) in summary.top_messages.iter().enumerate() {
        writeln!(out, "   {}. {}", rank + 1, slot.message)?;
    }
    writeln!(out, "Start Date/Time: {}", time_or_dash(summary.start.as_ref()))?;
    writeln!(out, "End Date/Time: {}", time_or_dash(summary.end.as_ref()))?;
    Ok(())
}

fn time_or_dash(ts: Option<&chrono::NaiveDateTime>) -> String {
    ts.map_or_else(|| "-".to_string(), format_timestamp)
}

#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileView<'a>>>,
    global: SummaryView<'a>,
}

#[derive(Serialize)]
struct FileView<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(flatten)]
    summary: SummaryView<'a>,
}

#[derive(Serialize)]
struct SummaryView<'a> {
    entries: EntryCount,
    severities: &'a SeverityFrequency,
    top_messages: Vec<&'a RankedMessage>,
    start: Option<String>,
    end: Option<String>,
}

impl<'a> From<&'a Summary> for SummaryView<'a> {
    fn from(summary: &'a Summary) -> Self {
        Self {
            entries: summary.entries,
            severities: &summary.severities,
            top_messages: summary.top_messages.iter().collect(),
            start: summary.start.as_ref().map(format_timestamp),
            end: summary.end.as_ref().map(format_timestamp),
        }
    }
}

impl<'a> From<&'a FileOutcome> for FileView<'a> {
    fn from(file: &'a FileOutcome) -> Self {
        Self {
            path: file.path.display().to_string(),
            error: file.read_error.as_deref(),
            summary: SummaryView::from(&file.summary),
        }
    }
}

fn write_json<W: Write>(out: &mut W, report: &AnalysisReport, per_file: bool) -> PresentationResult<()> {
    let view = ReportView {
        files: per_file.then(|| report.files.iter().map(FileView::from).collect()),
        global: SummaryView::from(&report.global),
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)?;
    Ok(())
}
