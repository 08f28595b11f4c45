//! Calendar date extraction.
//!
//! Lines are scanned in document order with the matchers from `matchers.rs`;
//! the first validated date wins. Month names go through `months.rs`, which
//! also repairs the usual OCR confusions.
//!
//! The confidence attached to a [`DateMatch`] is informational. It starts from
//! the matcher's base confidence and is raised when the line says what the
//! date is for ("Paid on", "Invoice Date:"). It never changes which date wins.

mod matchers;
mod months;


use crate::api::Options;
use crate::engine::{NormalizedText, first_hit, line_hit};
use chrono::NaiveDate;
use matchers::DATE_MATCHERS;
use serde::Serialize;

/// Line phrases naming the payment date.
const PAYMENT_CONTEXT: &[&str] = &["paid at", "payment date", "transaction date", "paid on"];
/// Line phrases naming a document date.
const DOCUMENT_CONTEXT: &[&str] = &["invoice date", "bill date", "date of issue", "dated", "date:"];

const PAYMENT_BOOST: u8 = 15;
const DOCUMENT_BOOST: u8 = 10;

/// A validated date and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateMatch {
    pub date: NaiveDate,
    /// Name of the matcher that produced the date.
    pub rule: &'static str,
    /// 0-100.
    pub confidence: u8,
    pub line_index: usize,
}

/// Extract the receipt date with default [`Options`].
pub fn extract_date(text: &NormalizedText) -> Option<DateMatch> {
    extract_date_with(text, &Options::default())
}

/// Extract the receipt date.
pub fn extract_date_with(text: &NormalizedText, options: &Options) -> Option<DateMatch> {
    let hit = first_hit(text.lines(), &DATE_MATCHERS, options)?;
    let line = &text.lines()[hit.line_index];

    Some(DateMatch {
        date: hit.value,
        rule: hit.rule,
        confidence: boosted_confidence(hit.confidence, line),
        line_index: hit.line_index,
    })
}

/// Whether `line` holds anything the date matchers accept.
pub(crate) fn line_has_date(line: &str, options: &Options) -> bool {
    line_hit(line, 0, &DATE_MATCHERS, options).is_some()
}

fn boosted_confidence(base: u8, line: &str) -> u8 {
    let lower = line.to_lowercase();

    let boost = if PAYMENT_CONTEXT.iter().any(|k| lower.contains(k)) {
        PAYMENT_BOOST
    } else if DOCUMENT_CONTEXT.iter().any(|k| lower.contains(k)) {
        DOCUMENT_BOOST
    } else {
        0
    };

    base.saturating_add(boost).min(100)
}
