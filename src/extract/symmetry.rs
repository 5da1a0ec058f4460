// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bijectiveness check on the merged mapping

use super::error::ExtractError;
use crate::types::{LcidMapping, LcidRecord};
use std::collections::{BTreeMap, HashMap};

const MOST_COMMON_LIMIT: usize = 5;

/// The `limit` most frequent tags, by count then tag.
pub fn most_common_tags(entries: &BTreeMap<u32, String>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in entries.values() {
        *counts.entry(tag.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Accept the merged entries only if no tag is shared by two LCIDs.
pub fn validate(entries: BTreeMap<u32, String>) -> Result<LcidMapping, ExtractError> {
    let mapping = LcidMapping::from_records(
        entries
            .iter()
            .map(|(lcid, tag)| LcidRecord::new(*lcid, tag.clone())),
    );

    if !mapping.is_symmetric() {
        let most_common = most_common_tags(&entries, MOST_COMMON_LIMIT);
        println!("keys={}", mapping.forward().len());
        println!("values={}", mapping.inverse().len());
        println!("common={:?}", most_common);
        return Err(ExtractError::Asymmetric {
            lcids: mapping.forward().len(),
            lang_tags: mapping.inverse().len(),
            most_common,
        });
    }

    Ok(mapping)
}
