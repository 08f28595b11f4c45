//! Rule-based receipt text extraction.
//!
//! `receiptor` takes the flat, line-broken text an OCR engine produced for a
//! photographed bill and recovers the fields an expense form needs: the total
//! amount, the merchant, the date and time of payment, and a spending category
//! from a fixed taxonomy. Every field is a best-effort guess; anything that
//! cannot be recovered is simply absent and the accompanying quality score
//! drops accordingly.
//!
//! ```
//! let receipt = "SWIGGY\nOrder #12345\n04 Sep 2025\nPaid at 06:21 PM\nTotal: Rs. 350";
//! let out = receiptor::extract(receipt);
//!
//! assert_eq!(out.category, receiptor::Category::Meals);
//! assert_eq!(out.time_hhmm().as_deref(), Some("18:21"));
//! assert!(out.quality_score >= 80);
//! ```
//!
//! The engine is pure: no I/O, no clock, no shared mutable state. The same
//! text always yields the same result, and calls may run on any number of
//! threads at once.

extern crate self as receiptor;

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    ExtractionDetails, ExtractionReport, ExtractionResult, Options, QualityLevel, extract, extract_verbose_with,
    extract_with,
};
pub use engine::{NormalizedText, RunMetrics, aggregate, quality_score};
pub use rules::amount::{
    AmountCandidate, AmountSource, context_amount, currency_amount, extract_amount, fallback_amount, word_amount,
};
pub use rules::category::{Category, CategoryScores, category_scores, classify};
pub use rules::date::{DateMatch, extract_date, extract_date_with};
pub use rules::time::{TimeMatch, extract_time, extract_time_with};
pub use rules::vendor::{VendorCandidate, extract_vendor, vendor_candidates};

use crate::engine::{ScanContext, SignalMask};

// --- Internal types ---------------------------------------------------------

/// The receipt fields the engine knows how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    Amount,
    Vendor,
    Date,
    Time,
    Category,
}

impl Field {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Vendor => "vendor",
            Field::Date => "date",
            Field::Time => "time",
            Field::Category => "category",
        }
    }
}

pub(crate) type Production<T> = fn(&Captures<'_>, &ScanContext<'_>) -> Option<T>;

/// A line matcher: a name, one regex tried against a single receipt line, and
/// a `production` that turns a match into a validated value.
///
/// Matchers are declared with the `matcher!` macro and kept in ordered static
/// lists; the list order is the priority order.
pub(crate) struct Matcher<T> {
    pub name: &'static str,
    /// Stored as a static reference created via the `regex!` macro.
    pub regex: &'static Regex,
    /// Signals a line must carry before the regex is even tried.
    pub buckets: SignalMask,
    /// Base confidence (0-100) attached to values this matcher produces.
    pub confidence: u8,
    pub production: Production<T>,
}

impl<T> std::fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// A value produced by a `Matcher`, together with where it came from.
#[derive(Debug, Clone)]
pub(crate) struct Hit<T> {
    pub value: T,
    pub rule: &'static str,
    pub confidence: u8,
    pub line_index: usize,
}
