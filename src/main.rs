// SPDX-License-Identifier: PMPL-1.0-or-later

//! lcid-gen: build LCID <-> language tag lookup tables
//!
//! `extract` scrapes the MS-LCID reference page into a CSV, `generate` turns
//! that CSV into a static source module, `run` does both in sequence.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lcid_gen::config::{ProjectLayout, AUTHORITATIVE_TABLES, DEFAULT_JAVA_PACKAGE, LCID_LIST_URL};
use lcid_gen::extract::{self, DocumentSource, ExtractConfig};
use lcid_gen::generate::{self, GenerateConfig, ModuleTarget};
use lcid_gen::report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lcid-gen")]
#[command(version)]
#[command(about = "Build LCID <-> language tag lookup tables from the MS-LCID reference")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the reference tables into the intermediate CSV
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Project root (defaults to this crate's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// CSV destination (default: <root>/data/lcid_to_lang_tag.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the lookup-table module from the intermediate CSV
    Generate {
        #[command(flatten)]
        module: ModuleArgs,

        /// Project root (defaults to this crate's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// CSV to read (default: <root>/data/lcid_to_lang_tag.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Extract then generate
    Run {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        module: ModuleArgs,

        /// Project root (defaults to this crate's directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Reference page URL
    #[arg(long, default_value = LCID_LIST_URL)]
    url: String,

    /// Read a saved copy of the reference page instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    html: Option<PathBuf>,

    /// Zero-based positions of the tables to merge, in order
    #[arg(long, value_delimiter = ',', default_values_t = AUTHORITATIVE_TABLES)]
    tables: Vec<usize>,
}

impl SourceArgs {
    fn document_source(&self) -> DocumentSource {
        match &self.html {
            Some(path) => DocumentSource::File(path.clone()),
            None => DocumentSource::Url(self.url.clone()),
        }
    }
}

#[derive(Args)]
struct ModuleArgs {
    /// Language of the generated module
    #[arg(short, long, value_enum, default_value = "rust")]
    target: ModuleTarget,

    /// Module destination (default depends on target)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package of the generated Java class
    #[arg(long, default_value = DEFAULT_JAVA_PACKAGE)]
    java_package: String,

    /// Do not echo generated lines
    #[arg(short, long)]
    quiet: bool,
}

impl ModuleArgs {
    fn generate_config(&self, layout: &ProjectLayout, input: PathBuf) -> GenerateConfig {
        let output = self.output.clone().unwrap_or_else(|| match self.target {
            ModuleTarget::Rust => layout.rust_module_path(),
            ModuleTarget::Java => layout.java_module_path(&self.java_package),
        });
        GenerateConfig {
            input,
            output,
            target: self.target,
            java_package: self.java_package.clone(),
            echo: !self.quiet,
        }
    }
}

fn run_extract(config: &ExtractConfig) -> Result<()> {
    println!("Extracting LCID tables from: {}", config.source);
    let report = extract::run(config)?;
    report::print_extract_report(&report);
    Ok(())
}

fn run_generate(config: &GenerateConfig) -> Result<()> {
    println!("Generating {:?} module from: {}", config.target, config.input.display());
    let report = generate::run(config)?;
    report::print_generate_report(&report);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            source,
            root,
            output,
        } => {
            let layout = ProjectLayout::resolve(root);
            run_extract(&ExtractConfig {
                source: source.document_source(),
                tables: source.tables.clone(),
                output: output.unwrap_or_else(|| layout.intermediate_path()),
            })?;
        }

        Commands::Generate {
            module,
            root,
            input,
        } => {
            let layout = ProjectLayout::resolve(root);
            let input = input.unwrap_or_else(|| layout.intermediate_path());
            run_generate(&module.generate_config(&layout, input))?;
        }

        Commands::Run {
            source,
            module,
            root,
        } => {
            let layout = ProjectLayout::resolve(root);
            let intermediate = layout.intermediate_path();
            run_extract(&ExtractConfig {
                source: source.document_source(),
                tables: source.tables.clone(),
                output: intermediate.clone(),
            })?;
            run_generate(&module.generate_config(&layout, intermediate))?;
        }
    }

    Ok(())
}
