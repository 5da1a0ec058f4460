// SPDX-License-Identifier: PMPL-1.0-or-later

//! Retrieval of the reference document

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Where the reference HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    /// A saved copy of the page, for offline runs
    File(PathBuf),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => write!(f, "{}", url),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn fetch_document(source: &DocumentSource) -> Result<String> {
    match source {
        DocumentSource::Url(url) => fetch_url(url),
        DocumentSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("reading reference document {}", path.display())),
    }
}

fn fetch_url(url: &str) -> Result<String> {
    // ureq reports non-2xx statuses as errors
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching {}", url))?;
    response
        .into_string()
        .with_context(|| format!("reading response body from {}", url))
}
