// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console summaries for extract and generate runs

use crate::extract::ExtractReport;
use crate::generate::GenerateReport;
use crate::types::SkipReason;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_extract(&self, report: &ExtractReport) {
        let extraction = &report.extraction;
        let invalid_lcids = extraction
            .skipped
            .iter()
            .filter(|row| row.reason == SkipReason::InvalidLcid)
            .count();
        let invalid_tags = extraction.skipped.len() - invalid_lcids;

        println!("\n{}", "EXTRACT SUMMARY".bold().yellow());
        println!("  Source: {}", report.source);
        println!("  Tables found: {}", extraction.tables_found);
        println!("  Rows read: {}", extraction.rows_seen);
        println!("  Rows skipped (invalid lcid): {}", invalid_lcids);
        println!("  Rows skipped (invalid locale): {}", invalid_tags);

        if extraction.overrides.is_empty() {
            println!("  Overrides: {}", "0".green());
        } else {
            println!(
                "  Overrides: {}",
                extraction.overrides.len().to_string().yellow()
            );
            for o in &extraction.overrides {
                println!(
                    "    - lcid {}: {} -> {} (table {})",
                    o.lcid, o.previous, o.replacement, o.table
                );
            }
        }

        println!(
            "  Mapping: {} entries ({})",
            extraction.mapping.len().to_string().bold(),
            "symmetric".green()
        );
        println!("  Written to: {}", report.output.display());
    }

    pub fn print_generate(&self, report: &GenerateReport) {
        println!("\n{}", "GENERATE SUMMARY".bold().yellow());
        println!("  Target: {:?}", report.target);
        println!("  Forward entries: {}", report.forward_entries);
        println!("  Inverse entries: {}", report.inverse_entries);
        if report.forward_entries != report.inverse_entries {
            println!(
                "  {}",
                "forward and inverse tables differ in size; re-run extract".red()
            );
        }
        println!("  Lines: {}", report.lines);
        println!("  Written to: {}", report.output.display());
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
