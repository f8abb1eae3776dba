use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExtractError, Result};
use crate::header::NameParty;
use crate::meta::{Chamber, FileMeta};
use crate::parser::{AddressRecord, ProcessedDocument};

pub const MISSING_SECTION_ERROR: &str = "Office Listings missing";

const CSV_HEADER: [&str; 8] = ["name", "party", "address", "state", "chamber", "district", "suspicious", "error"];

/// One line of the final report. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub name: String,
    pub party: String,
    pub address: String,
    pub state: String,
    pub chamber: Chamber,
    pub district: u32,
    pub suspicious: bool,
    pub error: String,
}

impl OutputRow {
    pub fn address(who: &NameParty, meta: &FileMeta, record: AddressRecord) -> Self {
        OutputRow {
            name: who.name.clone(),
            party: who.party.to_string(),
            address: record.address,
            state: meta.state.clone(),
            chamber: meta.chamber,
            district: meta.district,
            suspicious: record.suspicious,
            error: String::new(),
        }
    }

    /// Placeholder row for a document without an office block. The filename
    /// stands in for the name so a reviewer can find the source file.
    pub fn missing_section(filename: &str, meta: &FileMeta) -> Self {
        OutputRow {
            name: filename.to_string(),
            party: String::new(),
            address: String::new(),
            state: meta.state.clone(),
            chamber: meta.chamber,
            district: meta.district,
            suspicious: true,
            error: MISSING_SECTION_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

pub fn write_report(path: &Path, rows: &[OutputRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(path, rows),
        OutputFormat::Json => write_json(path, rows),
    }
}

pub fn write_csv(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    // serde writes the header with the first row, so an empty report needs it by hand.
    if rows.is_empty() {
        wtr.write_record(CSV_HEADER)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn write_json(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let file = File::create(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows)?;
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub rows: usize,
    pub suspicious: usize,
    pub missing_sections: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, doc: &ProcessedDocument) {
        self.documents += 1;
        self.rows += doc.rows.len();
        self.suspicious += doc.rows.iter().filter(|r| r.suspicious).count();
        if doc.missing_section() {
            self.missing_sections += 1;
        }
    }

    pub fn print(&self) {
        info!(
            documents = self.documents,
            rows = self.rows,
            suspicious = self.suspicious,
            missing_sections = self.missing_sections,
            skipped = self.skipped,
            "run summary"
        );
        println!(
            "Processed {} documents: {} rows, {} suspicious, {} missing office listings, {} skipped.",
            self.documents, self.rows, self.suspicious, self.missing_sections, self.skipped,
        );
    }
}
