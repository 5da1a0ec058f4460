// SPDX-License-Identifier: PMPL-1.0-or-later

//! Union of the authoritative tables into one LCID-keyed map

use super::normalize::normalize_row;
use super::table::Table;
use crate::types::{Override, SkippedRow};
use colored::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub entries: BTreeMap<u32, String>,
    pub rows_seen: usize,
    pub skipped: Vec<SkippedRow>,
    pub overrides: Vec<Override>,
}

/// Normalize every row and insert it keyed by LCID, later rows winning.
///
/// Rows missing the tag column are normalized with an empty tag and so end
/// up skipped like any other malformed row. When a later table replaces an
/// earlier table's tag the change is kept but recorded as an [`Override`],
/// since the reference page is not expected to contain any.
pub fn merge_tables<'a, I>(tables: I) -> MergeOutcome
where
    I: IntoIterator<Item = &'a Table>,
{
    let mut outcome = MergeOutcome::default();
    // table that wrote each entry
    let mut written_by: BTreeMap<u32, usize> = BTreeMap::new();

    for table in tables {
        for row in &table.rows {
            outcome.rows_seen += 1;
            let lcid_cell = row.first().map(String::as_str).unwrap_or_default();
            let tag_cell = row.get(1).map(String::as_str).unwrap_or_default();

            match normalize_row(table.index, lcid_cell, tag_cell) {
                Ok((lcid, tag)) => {
                    let previous = outcome.entries.insert(lcid, tag.clone());
                    let previous_table = written_by.insert(lcid, table.index);
                    if let (Some(previous), Some(previous_table)) = (previous, previous_table) {
                        if previous != tag && previous_table != table.index {
                            println!(
                                "{} lcid={} {} replaced by {} (table {})",
                                "override:".yellow(),
                                lcid,
                                previous,
                                tag,
                                table.index
                            );
                            outcome.overrides.push(Override {
                                lcid,
                                previous,
                                replacement: tag,
                                table: table.index,
                            });
                        }
                    }
                }
                Err(skipped) => {
                    report_skip(&skipped);
                    outcome.skipped.push(skipped);
                }
            }
        }
    }

    outcome
}

fn report_skip(skipped: &SkippedRow) {
    match skipped.lcid {
        None => println!("lcid={} invalid", skipped.lcid_cell.dimmed()),
        Some(lcid) => println!(
            "{}={} lcid={}",
            skipped.reason,
            skipped.lang_tag_cell.dimmed(),
            lcid
        ),
    }
}
