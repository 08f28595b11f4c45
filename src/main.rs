mod cli;
mod debug_report;

use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, CliError, Receipt};
use receiptor::{ExtractionReport, Options, extract_verbose_with};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let fallback_date = cli.fallback_date()?;
    let receipts = cli.receipts()?;
    let options = cli.options();
    let color = cli.use_color();

    for receipt in &receipts {
        let report = extract_one(receipt, &options);

        if cli.json {
            print_json(&report, fallback_date, cli.verbose)?;
        } else {
            debug_report::print_report(&receipt.label, &report, fallback_date, cli.verbose, color);
        }
    }

    Ok(())
}

fn extract_one(receipt: &Receipt, options: &Options) -> ExtractionReport {
    let _span = tracing::info_span!("receipt", label = receipt.label.as_str()).entered();
    extract_verbose_with(&receipt.text, options)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a receiptor::ExtractionResult,
    /// Only set when `--fallback-date` was given and the receipt had no date.
    #[serde(skip_serializing_if = "Option::is_none")]
    date_fallback: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a receiptor::ExtractionDetails>,
}

fn print_json(report: &ExtractionReport, fallback_date: Option<NaiveDate>, verbose: bool) -> Result<(), CliError> {
    let doc = JsonReport {
        result: &report.result,
        date_fallback: fallback_date.filter(|_| report.result.date.is_none()),
        details: verbose.then_some(&report.details),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
