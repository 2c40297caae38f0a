// SPDX-License-Identifier: Apache-2.0

use crate::config;

use clap::{Parser, Subcommand};

use std::path::PathBuf;

/// Syncs glossary terms from a Google Doc or CSV export to markdown files
#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case")]
pub struct Params {
    /// Show detailed parsing information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the glossary document and write one markdown file per completed term
    Sync {
        /// Preview the run without writing any files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Id of the Google Doc to fetch
        #[arg(long, default_value = config::DEFAULT_DOC_ID)]
        doc_id: String,

        /// Name of the document tab holding the definitions
        #[arg(long, default_value = config::DEFAULT_TAB_NAME)]
        tab: String,

        /// Directory the markdown files are written to
        #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// OAuth token file for the Google Docs API
        #[arg(long, default_value = config::DEFAULT_TOKEN_FILE)]
        token_file: PathBuf,
    },
    /// Import terms from a CSV export instead of the live document
    Import {
        /// Path to the CSV export
        csv_file: PathBuf,

        /// Directory the markdown files are written to
        #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}
