// SPDX-License-Identifier: PMPL-1.0-or-later

//! The `lcid,lang_tag` CSV file bridging the extract and generate stages

use crate::config::{LANG_TAG_HEADER, LCID_HEADER};
use crate::storage::persist_artifact;
use crate::types::{LcidMapping, LcidRecord};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Serialize the mapping as CSV, header first, rows by ascending LCID.
pub fn to_csv(mapping: &LcidMapping) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in mapping.records() {
        writer.serialize(&record)?;
    }
    // An empty mapping still gets its header row.
    if mapping.is_empty() {
        writer.write_record([LCID_HEADER, LANG_TAG_HEADER])?;
    }
    writer
        .into_inner()
        .map_err(|err| anyhow!("flushing csv buffer: {}", err.error()))
}

pub fn write_records(path: &Path, mapping: &LcidMapping) -> Result<()> {
    let bytes = to_csv(mapping)?;
    persist_artifact(path, &bytes)
}

pub fn parse_records(data: &[u8]) -> Result<Vec<LcidRecord>> {
    let mut reader = csv::Reader::from_reader(data);
    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<LcidRecord>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let record = row.with_context(|| format!("malformed row at line {}", index + 2))?;
        records.push(record);
    }
    Ok(records)
}

pub fn read_records(path: &Path) -> Result<Vec<LcidRecord>> {
    let data = std::fs::read(path)
        .with_context(|| format!("reading intermediate file {}", path.display()))?;
    parse_records(&data).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> LcidMapping {
        LcidMapping::from_records(vec![
            LcidRecord::new(1036, "fr-FR"),
            LcidRecord::new(9, "en"),
            LcidRecord::new(1033, "en-US"),
        ])
    }

    #[test]
    fn test_csv_has_header_and_ascending_rows() {
        let text = String::from_utf8(to_csv(&sample_mapping()).unwrap()).unwrap();
        assert_eq!(text, "lcid,lang_tag\n9,en\n1033,en-US\n1036,fr-FR\n");
    }

    #[test]
    fn test_empty_mapping_writes_header_only() {
        let text = String::from_utf8(to_csv(&LcidMapping::default()).unwrap()).unwrap();
        assert_eq!(text, "lcid,lang_tag\n");
    }

    #[test]
    fn test_parse_records_reads_rows_in_file_order() {
        let records = parse_records(b"lcid,lang_tag\n1033,en-US\n1036,fr-FR\n").unwrap();
        assert_eq!(
            records,
            vec![LcidRecord::new(1033, "en-US"), LcidRecord::new(1036, "fr-FR")]
        );
    }

    #[test]
    fn test_parse_records_rejects_non_numeric_lcid() {
        let err = parse_records(b"lcid,lang_tag\nabc,en-US\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_read_records_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_records(&dir.path().join("missing.csv")).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
