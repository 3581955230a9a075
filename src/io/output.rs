//! Result writers for a finished expansion run.
//!
//! The plain text format is the canonical artifact: one admitted node
//! identifier per line, in admission order. TSV and JSON carry the p-values
//! and run metadata for downstream analysis.

use std::io::Write;

use serde::Serialize;

use crate::expand::{Expansion, ExpansionParams, SelectionRecord, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}

/// Everything a writer may want to say about one run.
#[derive(Debug, Serialize)]
pub struct ExpansionReport {
    pub network_nodes: usize,
    pub network_edges: usize,
    pub params: ExpansionParams,
    pub seeds_in_network: Vec<String>,
    pub seeds_missing: Vec<String>,
    pub termination: Termination,
    pub added: Vec<SelectionRecord>,
}

impl ExpansionReport {
    pub fn new(network_nodes: usize, network_edges: usize, params: ExpansionParams, run: Expansion) -> Self {
        Self {
            network_nodes,
            network_edges,
            params,
            seeds_in_network: run.seeds_in_network,
            seeds_missing: run.seeds_missing,
            termination: run.termination,
            added: run.records,
        }
    }
}

pub trait SelectionWriter {
    fn write_report(&mut self, report: &ExpansionReport) -> anyhow::Result<()>;
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SelectionWriter for TextWriter<W> {
    fn write_report(&mut self, report: &ExpansionReport) -> anyhow::Result<()> {
        for record in &report.added {
            writeln!(self.writer, "{}", record.node)?;
        }
        Ok(())
    }
}

pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SelectionWriter for TsvWriter<W> {
    fn write_report(&mut self, report: &ExpansionReport) -> anyhow::Result<()> {
        writeln!(self.writer, "rank\tnode\tp_value")?;
        for record in &report.added {
            writeln!(
                self.writer,
                "{}\t{}\t{:e}",
                record.iteration, record.node, record.p_value
            )?;
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SelectionWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ExpansionReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn SelectionWriter> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Tsv => Box::new(TsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
