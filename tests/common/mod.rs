// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared fixtures: a trimmed stand-in for the MS-LCID reference page

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Four tables like the real page; positions 2 and 3 carry the data.
pub const REFERENCE_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table><tr><th>Revision</th><th>Date</th></tr><tr><td>16.0</td><td>2024</td></tr></table>
<table><tr><td>See also</td><td>MS-OE376</td></tr></table>
<table>
  <thead><tr><th>Language ID</th><th>Language tag</th><th>Language</th></tr></thead>
  <tbody>
    <tr><td>0x0009</td><td>en</td><td>English</td></tr>
    <tr><td>0x000C</td><td>fr</td><td>French</td></tr>
    <tr><td>0x0409&lt;1&gt;</td><td>en-US, English (United States)</td><td>English</td></tr>
    <tr><td>0x040C</td><td>fr-FR</td><td>French</td></tr>
    <tr><td>0x0C0C</td><td>fr-CA</td><td>French</td></tr>
    <tr><td>0x0404</td><td>zh-TW</td><td>Chinese</td></tr>
    <tr><td>0x0C00</td><td>Default custom locale language-Default custom sublanguage</td><td>-</td></tr>
    <tr><td>0x007F</td><td>x-IV-mathan (math alphanumeric sorting)</td><td>Invariant</td></tr>
    <tr><td>0x7C04</td><td>zh_Hant</td><td>Chinese</td></tr>
  </tbody>
</table>
<table>
  <tr><th>LCID</th><th>Language tag</th></tr>
  <tr><td>0x0804</td><td>zh_Hans_reserved</td></tr>
  <tr><td>0x0410</td><td>it-IT</td></tr>
  <tr><td>n/a</td><td>xx-XX</td></tr>
</table>
</body></html>
"#;

pub fn write_page(dir: &Path, html: &str) -> PathBuf {
    let path = dir.join("ms-lcid.html");
    fs::write(&path, html).unwrap();
    path
}

/// Page with `second` as table 3, keeping tables 0-2 from the reference page.
pub fn page_with_second_table(second_rows: &[(&str, &str)]) -> String {
    let mut rows = String::new();
    for (lcid, tag) in second_rows {
        rows.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", lcid, tag));
    }
    let cut = REFERENCE_PAGE
        .rfind("<table>")
        .expect("fixture has a last table");
    format!(
        "{}<table>{}</table></body></html>",
        &REFERENCE_PAGE[..cut],
        rows
    )
}
