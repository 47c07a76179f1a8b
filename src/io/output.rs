use crate::core::{AuditInputs, AuditResults};
use crate::formatting::{format_currency, format_number, FormattingConfig};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// An audit plus the inputs that produced it, stamped at generation time.
/// This is the envelope every writer renders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub inputs: AuditInputs,
    pub results: AuditResults,
}

impl AuditReport {
    pub fn new(inputs: AuditInputs, results: AuditResults) -> Self {
        Self {
            generated_at: Utc::now(),
            inputs,
            results,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AuditReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AuditReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AuditReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_recommendations(&report.results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AuditReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Lead Leak Audit Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Industry: {}", report.inputs.industry)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AuditReport) -> anyhow::Result<()> {
        let results = &report.results;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Severity | {} ({}/100) |",
            results.severity_level.as_str(),
            results.severity_score
        )?;
        writeln!(
            self.writer,
            "| Leads lost | {}/month ({}/year) |",
            format_number(i64::from(results.leads_lost_monthly)),
            format_number(i64::from(results.leads_lost_annually()))
        )?;
        writeln!(
            self.writer,
            "| Revenue lost monthly | {} |",
            format_currency(results.revenue_lost_monthly)
        )?;
        writeln!(
            self.writer,
            "| Revenue lost annually | {} |",
            format_currency(results.revenue_lost_annually)
        )?;
        writeln!(
            self.writer,
            "| ROI of fixing | {}% |",
            format_number(results.roi_of_fixing)
        )?;
        writeln!(
            self.writer,
            "| Recoverable | {}% of lost revenue ({}/month) |",
            results.potential_recovery_percent,
            format_currency(results.recoverable_revenue_monthly())
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, results: &AuditResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        if results.recommendations.is_empty() {
            writeln!(self.writer, "Lead handling looks healthy; nothing urgent.")?;
            return Ok(());
        }
        for (i, rec) in results.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, rec)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self { writer, config }
    }

    fn severity_label(&self, results: &AuditResults) -> String {
        let label = results.severity_level.as_str().to_uppercase();
        if self.config.color.should_use_color() {
            label
                .color(results.severity_level.color())
                .bold()
                .to_string()
        } else {
            label
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AuditReport) -> anyhow::Result<()> {
        let results = &report.results;

        writeln!(self.writer, "Lead Leak Audit: {}", report.inputs.industry)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Severity:              {} (score {}/100)",
            self.severity_label(results),
            results.severity_score
        )?;
        writeln!(
            self.writer,
            "  Leads lost:            {}/month ({}/year)",
            format_number(i64::from(results.leads_lost_monthly)),
            format_number(i64::from(results.leads_lost_annually()))
        )?;
        writeln!(
            self.writer,
            "  Revenue lost:          {}/month ({}/year)",
            format_currency(results.revenue_lost_monthly),
            format_currency(results.revenue_lost_annually)
        )?;
        writeln!(
            self.writer,
            "  ROI of fixing:         {}%",
            format_number(results.roi_of_fixing)
        )?;
        writeln!(
            self.writer,
            "  Recoverable:           {}% of lost revenue ({}/month)",
            results.potential_recovery_percent,
            format_currency(results.recoverable_revenue_monthly())
        )?;

        if !results.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Recommendations:")?;
            for (i, rec) in results.recommendations.iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, rec)?;
            }
        }

        Ok(())
    }
}

/// Build the writer for a format, targeting a file when `output` is given
/// and stdout otherwise. File output is always rendered plain.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    config: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let (sink, config): (Box<dyn Write>, FormattingConfig) = match output {
        Some(path) => (Box::new(fs::File::create(path)?), FormattingConfig::plain()),
        None => (Box::new(std::io::stdout()), config),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, config)),
    })
}
