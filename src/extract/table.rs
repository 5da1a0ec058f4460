// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML table extraction

use super::error::ExtractError;
use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

/// Data rows of one `<table>`, cells as whitespace-collapsed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Position of the table in the document
    pub index: usize,
    pub rows: Vec<Vec<String>>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| anyhow!("invalid selector {:?}: {:?}", css, err))
}

/// Every table in document order. Header rows made only of `<th>` are dropped.
///
/// Rows and cells belong to their nearest enclosing table, so a nested
/// table's rows are not repeated in its parent.
pub fn parse_tables(html: &str) -> Result<Vec<Table>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;

    let tables = document
        .select(&table_sel)
        .enumerate()
        .map(|(index, table)| {
            let rows = table
                .select(&row_sel)
                .filter(|row| enclosing_table(*row) == Some(table))
                .map(row_cells)
                .filter(|cells| cells.iter().any(|(is_data, _)| *is_data))
                .map(|cells| cells.into_iter().map(|(_, text)| text).collect::<Vec<_>>())
                .collect();
            Table { index, rows }
        })
        .collect();
    Ok(tables)
}

fn enclosing_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

/// Direct `th`/`td` children of a row, flagged `true` for `td`.
fn row_cells(row: ElementRef<'_>) -> Vec<(bool, String)> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter_map(|cell| match cell.value().name() {
            "td" => Some((true, cell_text(cell))),
            "th" => Some((false, cell_text(cell))),
            _ => None,
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pick the authoritative tables, checking each has LCID and tag columns.
///
/// Individual short rows are left for the merge step to skip; only a table
/// without a single two-column row is rejected.
pub fn select_tables<'a>(
    tables: &'a [Table],
    indices: &[usize],
) -> Result<Vec<&'a Table>, ExtractError> {
    indices
        .iter()
        .map(|&index| -> Result<&'a Table, ExtractError> {
            let table = tables.get(index).ok_or(ExtractError::MissingTable {
                index,
                found: tables.len(),
            })?;
            if !table.rows.iter().any(|cells| cells.len() >= 2) {
                return Err(ExtractError::TableShape {
                    table: index,
                    rows: table.rows.len(),
                });
            }
            Ok(table)
        })
        .collect()
}
