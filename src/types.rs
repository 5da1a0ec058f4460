// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for lcid-gen
//!
//! The bijective LCID <-> language tag mapping, its persisted row form, and
//! the diagnostics produced while scraping the reference tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One row of the intermediate CSV file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcidRecord {
    pub lcid: u32,
    pub lang_tag: String,
}

impl LcidRecord {
    pub fn new(lcid: u32, lang_tag: impl Into<String>) -> Self {
        Self {
            lcid,
            lang_tag: lang_tag.into(),
        }
    }
}

/// Forward and inverse views of the same LCID <-> language tag relation.
///
/// Both maps are `BTreeMap`s so iteration is already in the order the
/// generated tables need: ascending LCID and lexicographic tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcidMapping {
    forward: BTreeMap<u32, String>,
    inverse: BTreeMap<String, u32>,
}

impl LcidMapping {
    /// Build from rows already known to be bijective (the intermediate file).
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LcidRecord>,
    {
        let mut mapping = Self::default();
        for record in records {
            mapping
                .inverse
                .insert(record.lang_tag.clone(), record.lcid);
            mapping.forward.insert(record.lcid, record.lang_tag);
        }
        mapping
    }

    pub fn forward(&self) -> &BTreeMap<u32, String> {
        &self.forward
    }

    pub fn inverse(&self) -> &BTreeMap<String, u32> {
        &self.inverse
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Both directions hold the same number of entries.
    pub fn is_symmetric(&self) -> bool {
        self.forward.len() == self.inverse.len()
    }

    pub fn lang_tag(&self, lcid: u32) -> Option<&str> {
        self.forward.get(&lcid).map(String::as_str)
    }

    pub fn lcid(&self, lang_tag: &str) -> Option<u32> {
        self.inverse.get(lang_tag).copied()
    }

    /// Rows in ascending LCID order.
    pub fn records(&self) -> Vec<LcidRecord> {
        self.forward
            .iter()
            .map(|(lcid, tag)| LcidRecord::new(*lcid, tag.clone()))
            .collect()
    }
}

/// Why a raw table row was left out of the mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InvalidLcid,
    InvalidLangTag,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidLcid => write!(f, "invalid lcid"),
            SkipReason::InvalidLangTag => write!(f, "invalid locale"),
        }
    }
}

/// A raw row rejected during normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub table: usize,
    pub lcid_cell: String,
    pub lang_tag_cell: String,
    /// Parsed LCID, when the failure was in the tag cell
    pub lcid: Option<u32>,
    pub reason: SkipReason,
}

/// A later source table replaced an earlier table's tag for the same LCID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub lcid: u32,
    pub previous: String,
    pub replacement: String,
    pub table: usize,
}
