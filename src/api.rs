use crate::engine::{self, RunMetrics};
use crate::rules::amount::AmountCandidate;
use crate::rules::category::{Category, CategoryScores};
use crate::rules::date::DateMatch;
use crate::rules::time::TimeMatch;
use crate::rules::vendor::VendorCandidate;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub use crate::engine::QualityLevel;

/// Options that affect extraction behavior.
///
/// Defaults reproduce the standard heuristics; every field is a switch for
/// callers that need stricter matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Repair month names mangled by OCR ("Sen" for "Sep", "Oet" for "Oct").
    pub correct_month_ocr: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { correct_month_ocr: true }
    }
}

/// Structured expense fields recovered from one receipt.
///
/// Created fresh per call and owned by the caller. `None` always means
/// "not found"; there is no error variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Total amount, always in `(0, 1_000_000)` when present.
    pub amount: Option<BigDecimal>,
    /// Merchant name, at most 50 characters.
    pub vendor: Option<String>,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    /// Time of day, serialized as 24-hour `HH:MM`.
    #[serde(with = "hhmm")]
    pub time: Option<NaiveTime>,
    /// Never empty; `Miscellaneous` when no keyword matched.
    pub category: Category,
    pub description: String,
    /// Weighted completeness in `0..=100`.
    pub quality_score: u8,
    pub quality_level: QualityLevel,
    /// How much the date format and its line context vouch for the date
    /// (0-100). Present exactly when `date` is.
    pub date_confidence: Option<u8>,
}

impl ExtractionResult {
    /// The date as `YYYY-MM-DD`.
    pub fn date_iso(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// The time as 24-hour `HH:MM`.
    pub fn time_hhmm(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }
}

/// Intermediate candidates and timings behind an [`ExtractionResult`].
///
/// Meant for debugging and for review screens that want to show why a value
/// was chosen.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionDetails {
    /// Number of non-empty lines after normalization.
    pub lines: usize,
    /// Winning amount with its provenance.
    pub amount: Option<AmountCandidate>,
    /// Every vendor line that survived the skip rules, in line order.
    pub vendor_candidates: Vec<VendorCandidate>,
    pub date: Option<DateMatch>,
    pub time: Option<TimeMatch>,
    pub category_scores: CategoryScores,
    pub metrics: RunMetrics,
}

/// Result from [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub result: ExtractionResult,
    pub details: ExtractionDetails,
}

/// Extract fields from `text` with default [`Options`].
///
/// # Example
/// ```
/// use receiptor::extract;
///
/// let out = extract("Total: Rs. 350");
/// assert_eq!(out.amount.unwrap().to_string(), "350");
/// ```
pub fn extract(text: &str) -> ExtractionResult {
    extract_with(text, &Options::default())
}

/// Extract fields from `text` using the provided `options`.
pub fn extract_with(text: &str, options: &Options) -> ExtractionResult {
    engine::run(text, options).result
}

/// Extract fields from `text` and return the candidates and timings behind
/// each decision.
pub fn extract_verbose_with(text: &str, options: &Options) -> ExtractionReport {
    let run = engine::run(text, options);
    ExtractionReport { result: run.result, details: run.details }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
