// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summaries

pub mod formatter;

use crate::extract::ExtractReport;
use crate::generate::GenerateReport;

pub use formatter::ReportFormatter;

/// Print an extract run summary to the console
pub fn print_extract_report(report: &ExtractReport) {
    ReportFormatter::new().print_extract(report);
}

/// Print a generate run summary to the console
pub fn print_generate_report(report: &GenerateReport) {
    ReportFormatter::new().print_generate(report);
}
