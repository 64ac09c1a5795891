//! Inspect command implementation
//!
//! Dumps every intermediate stream of one pipeline run: the raw recurrence
//! value, its rank-normalised value and the mapped character.

use std::io::Write;
use std::str::FromStr;

use ecpass_core::{GeneratorConfig, PasswordGenerator, PipelineTrace};
use serde::Serialize;
use tracing::debug;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Where the stream starts from
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    /// Derive the seed from a memorable password (validated as for generate)
    Memorable(String),
    /// Start from an explicit seed
    Seed(f64),
}

/// Output format for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for InspectFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(InspectFormat::Table),
            "json" => Ok(InspectFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// One stream element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectRow {
    pub index: usize,
    pub raw: f64,
    pub uniform: f64,
    pub character: char,
}

/// Full inspection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub seed: f64,
    pub length: usize,
    pub password: String,
    pub rows: Vec<InspectRow>,
}

impl From<PipelineTrace> for InspectReport {
    fn from(trace: PipelineTrace) -> Self {
        let rows = trace
            .raw
            .iter()
            .zip(&trace.uniform)
            .zip(trace.password.as_str().chars())
            .enumerate()
            .map(|(index, ((&raw, &uniform), character))| InspectRow {
                index,
                raw,
                uniform,
                character,
            })
            .collect();

        Self {
            seed: trace.seed,
            length: trace.raw.len(),
            password: trace.password.into_inner(),
            rows,
        }
    }
}

/// Build the report without printing it
///
/// `length` is capped at the configured `max_length`. No lower bound applies,
/// so short streams can still be inspected.
pub fn inspect(config: &CliConfig, source: &SeedSource, length: usize) -> Result<InspectReport> {
    if length > config.max_length {
        return Err(CliError::invalid_argument(format!(
            "Length must not exceed {} (got {})",
            config.max_length, length
        )));
    }

    let generator =
        PasswordGenerator::with_config(GeneratorConfig::new(config.numeric_policy));
    let trace = match source {
        SeedSource::Memorable(memorable) => generator.trace(memorable, length)?,
        SeedSource::Seed(seed) => generator.trace_from_seed(*seed, length)?,
    };
    Ok(trace.into())
}

/// Run the inspect command
pub fn run<W: Write>(
    config: &CliConfig,
    source: &SeedSource,
    length: usize,
    format: InspectFormat,
    out: &mut W,
) -> Result<()> {
    debug!(length, ?format, "running inspect command");
    let report = inspect(config, source, length)?;

    match format {
        InspectFormat::Table => write_table(&report, out)?,
        InspectFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(report: &InspectReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:>5}  {:>22}  {:>20}  char", "index", "raw", "uniform")?;
    for row in &report.rows {
        writeln!(
            out,
            "{:>5}  {:>22.16}  {:>20.16}  {}",
            row.index, row.raw, row.uniform, row.character
        )?;
    }
    writeln!(out, "password: {}", report.password)
}
