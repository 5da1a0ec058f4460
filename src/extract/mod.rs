// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extract stage: reference page -> validated mapping -> intermediate CSV
//!
//! The page is fetched (or read from disk), the authoritative tables are
//! normalized and merged, the merged map is checked for symmetry, and only
//! then is the CSV replaced. Row-level problems are reported and skipped;
//! missing tables and asymmetry abort the run before anything is written.

pub mod error;
pub mod fetch;
pub mod merge;
pub mod normalize;
pub mod symmetry;
pub mod table;

pub use error::ExtractError;
pub use fetch::{fetch_document, DocumentSource};
pub use merge::{merge_tables, MergeOutcome};
pub use table::{parse_tables, select_tables, Table};

use crate::intermediate;
use crate::types::{LcidMapping, Override, SkippedRow};
use anyhow::Result;
use std::path::PathBuf;

/// Inputs for one extract run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub source: DocumentSource,
    /// Zero-based table positions, merged in this order
    pub tables: Vec<usize>,
    pub output: PathBuf,
}

/// Validated mapping plus everything noticed on the way
#[derive(Debug, Clone)]
pub struct Extraction {
    pub mapping: LcidMapping,
    pub tables_found: usize,
    pub rows_seen: usize,
    pub skipped: Vec<SkippedRow>,
    pub overrides: Vec<Override>,
}

/// Summary of a completed extract run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub source: String,
    pub extraction: Extraction,
    pub output: PathBuf,
}

/// Parse, normalize, merge and validate an already-fetched document.
pub fn extract_mapping(html: &str, table_indices: &[usize]) -> Result<Extraction> {
    let tables = parse_tables(html)?;
    let selected = select_tables(&tables, table_indices)?;
    let MergeOutcome {
        entries,
        rows_seen,
        skipped,
        overrides,
    } = merge_tables(selected);
    let mapping = symmetry::validate(entries)?;

    Ok(Extraction {
        mapping,
        tables_found: tables.len(),
        rows_seen,
        skipped,
        overrides,
    })
}

pub fn run(config: &ExtractConfig) -> Result<ExtractReport> {
    let html = fetch_document(&config.source)?;
    let extraction = extract_mapping(&html, &config.tables)?;
    intermediate::write_records(&config.output, &extraction.mapping)?;

    Ok(ExtractReport {
        source: config.source.to_string(),
        extraction,
        output: config.output.clone(),
    })
}
