// SPDX-License-Identifier: PMPL-1.0-or-later

//! Row normalization for the reference tables
//!
//! LCID cells are hex, sometimes followed by a `<n>` footnote marker. Tag
//! cells may list aliases after a comma, use `_` separators, or mark the
//! LCID as reserved; reserved rows are rejected.

use crate::types::{SkipReason, SkippedRow};

const MATH_SORT_SUFFIX: &str = " (math alphanumeric sorting)";
const RESERVED: &str = "reserved";

/// Parse an LCID cell such as `0x0409`, `0409` or `0x0C00<3>`.
pub fn parse_lcid_cell(cell: &str) -> Option<u32> {
    let text = cell.split('<').next().unwrap_or_default().trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Rewrite a language tag segment into hyphenated form.
///
/// The result may still contain whitespace (reserved markers, free text);
/// such tags are rejected by [`is_valid_lang_tag`].
pub fn normalize_lang_tag(tag: &str) -> String {
    tag.replace('_', "-")
        .replace(MATH_SORT_SUFFIX, "")
        .replace(RESERVED, " ")
}

pub fn is_valid_lang_tag(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains(char::is_whitespace)
}

/// First comma-separated segment of the tag cell, normalized.
pub fn lang_tag_from_cell(cell: &str) -> String {
    normalize_lang_tag(cell.split(',').next().unwrap_or_default())
}

/// Turn one raw row into an `(lcid, tag)` pair or a skip diagnostic.
pub fn normalize_row(
    table: usize,
    lcid_cell: &str,
    lang_tag_cell: &str,
) -> Result<(u32, String), SkippedRow> {
    let skipped = |lcid, reason| SkippedRow {
        table,
        lcid_cell: lcid_cell.to_string(),
        lang_tag_cell: lang_tag_cell.to_string(),
        lcid,
        reason,
    };

    let lcid = parse_lcid_cell(lcid_cell).ok_or_else(|| skipped(None, SkipReason::InvalidLcid))?;
    let tag = lang_tag_from_cell(lang_tag_cell);
    if !is_valid_lang_tag(&tag) {
        return Err(skipped(Some(lcid), SkipReason::InvalidLangTag));
    }
    Ok((lcid, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lcid_strips_footnote() {
        assert_eq!(parse_lcid_cell("0409<footnote>"), Some(0x409));
        assert_eq!(parse_lcid_cell("0x0C00<3>"), Some(0x0C00));
    }

    #[test]
    fn test_parse_lcid_accepts_prefix_and_whitespace() {
        assert_eq!(parse_lcid_cell("0x0409"), Some(1033));
        assert_eq!(parse_lcid_cell(" 0X0c0c "), Some(3084));
        assert_eq!(parse_lcid_cell("0c"), Some(12));
    }

    #[test]
    fn test_parse_lcid_rejects_non_hex() {
        assert_eq!(parse_lcid_cell("LCID"), None);
        assert_eq!(parse_lcid_cell(""), None);
        assert_eq!(parse_lcid_cell("<1>"), None);
        assert_eq!(parse_lcid_cell("0x"), None);
        assert_eq!(parse_lcid_cell("+10"), None);
    }

    #[test]
    fn test_first_alias_segment_only() {
        assert_eq!(lang_tag_from_cell("en-US, English (United States)"), "en-US");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(normalize_lang_tag("zh_Hans"), "zh-Hans");
    }

    #[test]
    fn test_math_sort_suffix_removed() {
        assert_eq!(
            normalize_lang_tag("x-IV-mathan (math alphanumeric sorting)"),
            "x-IV-mathan"
        );
    }

    #[test]
    fn test_reserved_becomes_space() {
        let tag = normalize_lang_tag("zh_Hans_reserved");
        assert!(tag.contains(' '));
        assert!(!is_valid_lang_tag(&tag));
    }

    #[test]
    fn test_normalization_is_idempotent_on_accepted_tags() {
        let cells = [
            "en-US",
            "zh_Hant_TW",
            "x-IV-mathan (math alphanumeric sorting)",
            "sr-Latn-RS, Serbian (Latin)",
            "qps-ploc",
        ];
        for cell in cells {
            let once = lang_tag_from_cell(cell);
            assert!(is_valid_lang_tag(&once), "{} should be accepted", cell);
            assert_eq!(normalize_lang_tag(&once), once);
        }
    }

    #[test]
    fn test_normalize_row_scenario_footnote_and_alias() {
        let row = normalize_row(2, "0409<footnote>", "en-US, English (United States)");
        assert_eq!(row, Ok((1033, "en-US".to_string())));
    }

    #[test]
    fn test_normalize_row_rejects_reserved_tag() {
        let skipped = normalize_row(3, "0c", "zh_Hans_reserved").unwrap_err();
        assert_eq!(skipped.reason, SkipReason::InvalidLangTag);
        assert_eq!(skipped.lcid, Some(12));
        assert_eq!(skipped.lang_tag_cell, "zh_Hans_reserved");
    }

    #[test]
    fn test_normalize_row_rejects_bad_lcid() {
        let skipped = normalize_row(2, "n/a", "en-US").unwrap_err();
        assert_eq!(skipped.reason, SkipReason::InvalidLcid);
        assert_eq!(skipped.lcid, None);
    }

    #[test]
    fn test_normalize_row_rejects_empty_tag() {
        let skipped = normalize_row(2, "0x1000", "").unwrap_err();
        assert_eq!(skipped.reason, SkipReason::InvalidLangTag);
    }
}
