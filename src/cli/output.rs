//! Output formatting for the run summary
//!
//! The summary goes to stdout in one of three formats: JSON and YAML for
//! machine consumption, human-readable text otherwise. Progress and warnings
//! go to stderr via tracing and never pass through here.

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::pipeline::SyncReport;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Formatter for sync reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a report according to the configured format
    pub fn format(&self, report: &SyncReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => self.format_human(report),
        }
    }

    fn format_json(&self, report: &SyncReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize sync report to JSON")
    }

    fn format_yaml(&self, report: &SyncReport) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize sync report to YAML")
    }

    fn format_human(&self, report: &SyncReport) -> Result<String> {
        let mut out = String::new();

        let verb = if report.dry_run {
            "Dry run complete"
        } else {
            "Sync complete"
        };
        writeln!(
            out,
            "{}: {} -> {}",
            verb,
            report.source.display(),
            report.target.display()
        )?;

        for block in &report.blocks {
            write!(
                out,
                "  {}: {} properties",
                block.name,
                block.extracted_keys.len()
            )?;
            if !block.missing_keys.is_empty() {
                write!(out, " (missing: {})", block.missing_keys.join(", "))?;
            }
            if !block.replaced_in_target {
                write!(out, " [no matching block in target]")?;
            }
            writeln!(out)?;
        }

        Ok(out)
    }
}
