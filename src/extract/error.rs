// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal extraction failures

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("reference document has {found} table(s), table {index} is required")]
    MissingTable { index: usize, found: usize },

    #[error("table {table} has no row with at least 2 cells ({rows} data row(s))")]
    TableShape { table: usize, rows: usize },

    #[error(
        "number of lcids ({lcids}) does not match number of language tags ({lang_tags}); \
         aborting as the mapping must be symmetrical"
    )]
    Asymmetric {
        lcids: usize,
        lang_tags: usize,
        /// Most frequent tags with their counts, highest first
        most_common: Vec<(String, usize)>,
    },
}
