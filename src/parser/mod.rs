pub mod block;
pub mod classify;
pub mod noise;
pub mod repair;
pub mod segment;
pub mod split;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::Document;
use crate::error::{ExtractError, Result};
use crate::header::{self, NameParty};
use crate::meta;
use crate::report::OutputRow;
use classify::SuspicionReason;

pub(crate) static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub address: String,
    pub suspicious: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Addresses(Vec<AddressRecord>),
    MissingSection,
}

/// Every intermediate value of the six-stage pipeline for one document.
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    pub block: &'a str,
    pub flattened: String,
    pub segments: Vec<String>,
    pub repaired: Vec<String>,
    pub addresses: Vec<(String, Vec<SuspicionReason>)>,
}

/// Run locate → strip → segment → repair → split → classify, keeping each
/// stage's output. `None` when there is no usable office block.
pub fn trace(text: &str) -> Option<Trace<'_>> {
    let block = block::locate(text).filter(|b| !b.is_empty())?;
    let flattened = noise::strip(block);
    let segments = segment::segment(&flattened);
    let repaired = repair::repair(&segments);
    let addresses = split::split_all(&repaired)
        .into_iter()
        .map(|addr| {
            let flags = classify::reasons(&addr);
            (addr, flags)
        })
        .collect();
    Some(Trace {
        block,
        flattened,
        segments,
        repaired,
        addresses,
    })
}

pub fn extract_addresses(text: &str) -> DocumentOutcome {
    match trace(text) {
        Some(t) => DocumentOutcome::Addresses(
            t.addresses
                .into_iter()
                .map(|(address, flags)| AddressRecord {
                    address,
                    suspicious: !flags.is_empty(),
                })
                .collect(),
        ),
        None => DocumentOutcome::MissingSection,
    }
}

/// Output rows for one document plus the recoverable problems met on the way.
#[derive(Debug)]
pub struct ProcessedDocument {
    pub rows: Vec<OutputRow>,
    pub diagnostics: Vec<ExtractError>,
}

impl ProcessedDocument {
    pub fn missing_section(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, ExtractError::MissingSection { .. }))
    }
}

/// Build the report rows for one document. Only a filename outside the CDIR
/// pattern is an error; a missing office block or header degrades into
/// diagnostics.
pub fn process_document(doc: &Document) -> Result<ProcessedDocument> {
    let file_meta = meta::parse_filename(&doc.filename)?;
    let mut diagnostics = Vec::new();

    let rows = match extract_addresses(&doc.text) {
        DocumentOutcome::MissingSection => {
            diagnostics.push(ExtractError::MissingSection {
                file: doc.filename.clone(),
            });
            vec![OutputRow::missing_section(&doc.filename, &file_meta)]
        }
        DocumentOutcome::Addresses(records) => {
            let who = header::extract_name_party(&doc.text).unwrap_or_else(|| {
                diagnostics.push(ExtractError::MissingHeaderMarker {
                    file: doc.filename.clone(),
                });
                NameParty::placeholder()
            });
            records
                .into_iter()
                .map(|record| OutputRow::address(&who, &file_meta, record))
                .collect()
        }
    };

    debug!(file = %doc.filename, rows = rows.len(), "processed document");
    Ok(ProcessedDocument { rows, diagnostics })
}
