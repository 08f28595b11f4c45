use chrono::{Local, NaiveDate};
use chrono_english::{Dialect, parse_date_string};
use clap::Parser;
use receiptor::Options;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Extract amount, vendor, date, time and category from OCR'd receipt text.
#[derive(Parser, Debug)]
#[command(name = "receiptor", version, about)]
#[command(after_help = "Exit codes:\n  0  Success.\n  1  A receipt file or stdin could not be read.\n  2  Invalid arguments or missing input.\n\nSet RUST_LOG=receiptor=debug to see which rule settled each field.")]
pub struct Cli {
    /// Receipt text files; each one is extracted separately.
    #[arg(value_name = "FILE", conflicts_with = "input")]
    pub files: Vec<PathBuf>,

    /// Receipt text given inline. Reads stdin when neither this nor FILE is given.
    #[arg(short, long, value_name = "TEXT")]
    pub input: Option<String>,

    /// Print one JSON document per receipt.
    #[arg(long)]
    pub json: bool,

    /// Include candidates, scores and per-stage timings.
    #[arg(short, long)]
    pub verbose: bool,

    /// Force ANSI color output.
    #[arg(long)]
    pub color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    pub no_color: bool,

    /// Do not repair OCR-mangled month names ("Oet" for "Oct").
    #[arg(long)]
    pub no_ocr_correction: bool,

    /// Date to show when a receipt has none, e.g. "today", "yesterday" or "2025-09-04".
    #[arg(long, value_name = "EXPR")]
    pub fallback_date: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("no input provided")]
    NoInput,
    #[error("invalid --fallback-date '{value}': {reason}")]
    FallbackDate { value: String, reason: String },
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } | CliError::Stdin(_) | CliError::Json(_) => 1,
            CliError::NoInput | CliError::FallbackDate { .. } => 2,
        }
    }
}

/// One receipt to process: where it came from and its text.
#[derive(Debug)]
pub struct Receipt {
    pub label: String,
    pub text: String,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options { correct_month_ocr: !self.no_ocr_correction }
    }

    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else {
            self.color || io::stdout().is_terminal()
        }
    }

    /// Resolve `--fallback-date` against the local clock.
    pub fn fallback_date(&self) -> Result<Option<NaiveDate>, CliError> {
        let Some(value) = &self.fallback_date else {
            return Ok(None);
        };

        parse_date_string(value, Local::now(), Dialect::Uk)
            .map(|dt| Some(dt.date_naive()))
            .map_err(|err| CliError::FallbackDate { value: value.clone(), reason: err.to_string() })
    }

    /// Load every receipt named on the command line, or stdin.
    pub fn receipts(&self) -> Result<Vec<Receipt>, CliError> {
        let receipts = if !self.files.is_empty() {
            self.files
                .iter()
                .map(|path| {
                    std::fs::read_to_string(path)
                        .map(|text| Receipt { label: path.display().to_string(), text })
                        .map_err(|source| CliError::Io { path: path.clone(), source })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else if let Some(text) = &self.input {
            vec![Receipt { label: "<input>".to_string(), text: text.clone() }]
        } else {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Stdin)?;
            vec![Receipt { label: "<stdin>".to_string(), text: buffer }]
        };

        if receipts.iter().all(|r| r.text.trim().is_empty()) {
            return Err(CliError::NoInput);
        }

        tracing::debug!(count = receipts.len(), "receipts loaded");
        Ok(receipts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::parse_from(["receiptor", "--no-ocr-correction", "-i", "Total 350"]);

        assert!(!cli.options().correct_month_ocr);
        assert!(Cli::parse_from(["receiptor", "-i", "x"]).options().correct_month_ocr);
    }

    #[test]
    fn inline_input_becomes_a_single_receipt() {
        let cli = Cli::parse_from(["receiptor", "--json", "--input", "SWIGGY\nTotal 350"]);
        let receipts = cli.receipts().unwrap();

        assert!(cli.json);
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].label, "<input>");
    }

    #[test]
    fn blank_input_is_rejected() {
        let err = Cli::parse_from(["receiptor", "-i", "   "]).receipts().unwrap_err();

        assert!(matches!(err, CliError::NoInput));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Cli::parse_from(["receiptor", "/definitely/not/here.txt"]).receipts().unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn files_and_inline_input_conflict() {
        assert!(Cli::try_parse_from(["receiptor", "a.txt", "-i", "text"]).is_err());
    }

    #[test]
    fn fallback_date_accepts_iso_dates() {
        let cli = Cli::parse_from(["receiptor", "--fallback-date", "2025-09-04", "-i", "x"]);

        assert_eq!(cli.fallback_date().unwrap(), NaiveDate::from_ymd_opt(2025, 9, 4));
        assert_eq!(Cli::parse_from(["receiptor", "-i", "x"]).fallback_date().unwrap(), None);
    }

    #[test]
    fn color_flags() {
        assert!(!Cli::parse_from(["receiptor", "--no-color", "-i", "x"]).use_color());
        assert!(Cli::parse_from(["receiptor", "--color", "-i", "x"]).use_color());
    }
}
