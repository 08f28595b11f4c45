//! Time-of-day extraction.
//!
//! Same discipline as dates: document order, then matcher order, first valid
//! time wins. Results are normalized to 24-hour `HH:MM` (seconds dropped).

mod matchers;

#[cfg(test)]
mod tests;

use crate::api::Options;
use crate::engine::{NormalizedText, first_hit};
use chrono::NaiveTime;
use matchers::TIME_MATCHERS;
use serde::Serialize;

/// A validated time of day and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeMatch {
    /// Seconds are always zero.
    pub time: NaiveTime,
    pub rule: &'static str,
    pub confidence: u8,
    pub line_index: usize,
}

/// Extract the time of payment with default [`Options`].
pub fn extract_time(text: &NormalizedText) -> Option<TimeMatch> {
    extract_time_with(text, &Options::default())
}

/// Extract the time of payment.
///
/// `options` only matters indirectly: the compact `hhmm` form is ignored on
/// lines that hold a date, and spotting one depends on month correction.
pub fn extract_time_with(text: &NormalizedText, options: &Options) -> Option<TimeMatch> {
    first_hit(text.lines(), &TIME_MATCHERS, options).map(|hit| TimeMatch {
        time: hit.value,
        rule: hit.rule,
        confidence: hit.confidence,
        line_index: hit.line_index,
    })
}
