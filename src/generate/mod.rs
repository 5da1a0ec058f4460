// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generate stage: intermediate CSV -> static lookup-table module

pub mod java;
pub mod rust;

use crate::config::{DEFAULT_JAVA_PACKAGE, LANG_TAG_HEADER, LCID_HEADER};
use crate::intermediate;
use crate::storage::persist_artifact;
use crate::types::LcidMapping;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Language of the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModuleTarget {
    Rust,
    Java,
}

impl ModuleTarget {
    pub fn render(&self, mapping: &LcidMapping, options: &RenderOptions) -> GeneratedModule {
        match self {
            ModuleTarget::Rust => rust::render(mapping, options),
            ModuleTarget::Java => java::render(mapping, options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name of the CSV the module was built from, for the header comment
    pub source: String,
    pub java_package: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source: format!("{}_to_{}.csv", LCID_HEADER, LANG_TAG_HEADER),
            java_package: DEFAULT_JAVA_PACKAGE.to_string(),
        }
    }
}

/// Rendered module text, one entry per line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedModule {
    lines: Vec<String>,
}

impl GeneratedModule {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Inputs for one generate run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: ModuleTarget,
    pub java_package: String,
    /// Print each generated line to stdout
    pub echo: bool,
}

/// Summary of a completed generate run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub target: ModuleTarget,
    pub forward_entries: usize,
    pub inverse_entries: usize,
    pub lines: usize,
    pub output: PathBuf,
}

fn source_label(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string())
}

/// Write the module to `out` line by line, as it was persisted.
pub fn echo_lines<W: Write>(module: &GeneratedModule, out: &mut W) -> io::Result<()> {
    for line in module.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn run(config: &GenerateConfig) -> Result<GenerateReport> {
    let records = intermediate::read_records(&config.input)?;
    let mapping = LcidMapping::from_records(records);

    let options = RenderOptions {
        source: source_label(&config.input),
        java_package: config.java_package.clone(),
    };
    let module = config.target.render(&mapping, &options);
    persist_artifact(&config.output, module.text().as_bytes())?;

    if config.echo {
        echo_lines(&module, &mut io::stdout().lock())
            .context("echoing generated module")?;
    }

    Ok(GenerateReport {
        target: config.target,
        forward_entries: mapping.forward().len(),
        inverse_entries: mapping.inverse().len(),
        lines: module.lines().len(),
        output: config.output.clone(),
    })
}
