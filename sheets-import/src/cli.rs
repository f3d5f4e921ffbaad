//! Command-line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use crate::api::SheetsClient;
use crate::config::{Config, Overrides};
use crate::import::{DryRunWriter, ImportReport, Importer, SheetWriter, Source, SourceOutcome};

#[derive(Debug, Parser)]
#[command(
    name = "sheets-import",
    version,
    about = "Append the school bot's CSV exports to its Google Sheets spreadsheet"
)]
pub struct Cli {
    /// Directory containing students.csv, parents.csv, teachers.csv, broadcasts.csv and logs.csv
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Spreadsheet to append to (overrides SPREADSHEET_ID)
    #[arg(short, long, value_name = "ID")]
    pub spreadsheet_id: Option<String>,

    /// Only import these sources (repeatable)
    #[arg(long, value_enum, value_name = "SOURCE")]
    pub only: Vec<Source>,

    /// Build the rows but log them instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            spreadsheet_id: self.spreadsheet_id.clone(),
            input_dir: self.input_dir.clone(),
            dry_run: self.dry_run,
        }
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Run the import described by the command line
pub async fn handle_import(args: &Cli) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(args.overrides()).context("Invalid configuration")?;

    println!(
        "{} {}",
        "Importing CSV exports from".bold(),
        config.input_dir.display().to_string().cyan()
    );

    match &config.sheets {
        Some(sheets) => {
            let client = SheetsClient::from_config(sheets)?;
            let report = execute(Importer::new(&config.input_dir, client), &args.only).await?;
            print_report(&report);
            println!(
                "{} {}",
                "Spreadsheet:".bold(),
                sheets.spreadsheet_url().bright_blue().underline()
            );
        }
        None => {
            println!("{}", "Dry run: nothing will be sent".yellow());
            let report = execute(Importer::new(&config.input_dir, DryRunWriter), &args.only).await?;
            print_report(&report);
        }
    }

    Ok(())
}

async fn execute<W: SheetWriter>(importer: Importer<W>, only: &[Source]) -> Result<ImportReport> {
    let mut importer = importer.with_sources(only);
    importer.run().await
}

fn print_report(report: &ImportReport) {
    println!();
    for outcome in &report.outcomes {
        match outcome {
            SourceOutcome::Appended { source, rows, .. } => println!(
                "  {} {:<11} {} rows",
                "✓".green(),
                source.to_string(),
                rows.to_string().bright_green()
            ),
            SourceOutcome::Skipped { source } => println!(
                "  {} {:<11} {}",
                "-".dimmed(),
                source.to_string(),
                "empty, skipped".dimmed()
            ),
        }
    }
    println!();
    println!(
        "{} {} rows across {} sheets",
        "Import complete:".bright_green().bold(),
        report.total_rows(),
        report.appended_sources()
    );
}
