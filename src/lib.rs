// SPDX-License-Identifier: PMPL-1.0-or-later

//! lcid-gen: LCID <-> language tag table builder.
//!
//! Two offline stages, coupled only through a CSV file:
//! 1. **Extract**: scrape the MS-LCID reference tables, normalize each row,
//!    merge them and refuse anything that is not a bijection.
//! 2. **Generate**: turn the CSV into a source module holding a forward and
//!    an inverse lookup table, sorted so output is reproducible.

pub mod config;
pub mod extract;
pub mod generate;
pub mod intermediate;
pub mod report;
pub mod storage;
pub mod types;
