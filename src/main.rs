// SPDX-License-Identifier: Apache-2.0

mod auth;
mod config;
mod csv_import;
mod error;
mod frontmatter;
mod gdoc;
mod logging;
mod metadata;
mod params;
mod parser;
mod report;
mod sync;
mod term;

use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let params = params::Params::parse();

    let log_level = if params.verbose { "debug" } else { "info" };
    logging::try_init(log_level).context("failed to initialize logger")?;

    let (report, dry_run) = match params.command {
        params::Command::Sync {
            dry_run,
            doc_id,
            tab,
            output_dir,
            token_file,
        } => {
            let config = config::Config {
                doc_id,
                tab_name: tab,
                output_dir,
                token_file,
            };
            (sync::sync(&config, dry_run)?, dry_run)
        }
        params::Command::Import {
            csv_file,
            output_dir,
        } => {
            let absolute_csv_file = if csv_file.is_relative() {
                std::env::current_dir()?.join(csv_file)
            } else {
                csv_file
            };
            (csv_import::import(&absolute_csv_file, &output_dir)?, false)
        }
    };

    report.log_summary(dry_run);

    Ok(())
}
