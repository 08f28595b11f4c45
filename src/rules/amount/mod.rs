//! Amount extraction.
//!
//! The total is recovered by an explicit chain of strategies tried in strict
//! priority order; the first one that yields an in-range value wins:
//!
//! ```text
//! context ──▶ currency symbol ──▶ word number ──▶ fallback ──▶ None
//! "total: 350"  max of "₹120","₹450"  "rupees five hundred only"  "bill 120"
//! ```
//!
//! Every strategy shares the signature `fn(&NormalizedText) -> Option<AmountCandidate>`
//! so each can be tested in isolation.

mod strategies;
mod words;

#[cfg(test)]
mod tests;

pub use strategies::{context_amount, currency_amount, fallback_amount, word_amount};

use crate::engine::NormalizedText;
use bigdecimal::BigDecimal;
use serde::Serialize;
use std::str::FromStr;

/// Which strategy produced an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AmountSource {
    /// A total/payable phrase followed by a number.
    Context,
    /// Largest number tagged with a currency marker.
    CurrencySymbol,
    /// "Rupees ... only" spelled out in words.
    WordNumber,
    /// First number on a bill/payment/charge/total line.
    Fallback,
}

/// A monetary value together with the strategy that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountCandidate {
    pub value: BigDecimal,
    pub source: AmountSource,
}

impl AmountCandidate {
    pub(crate) fn new(value: BigDecimal, source: AmountSource) -> Self {
        AmountCandidate { value, source }
    }
}

pub(crate) type AmountStrategy = fn(&NormalizedText) -> Option<AmountCandidate>;

/// Strategies in priority order.
pub(crate) const STRATEGIES: &[AmountStrategy] = &[context_amount, currency_amount, word_amount, fallback_amount];

/// Exclusive upper bound for any accepted amount.
const MAX_AMOUNT: i64 = 1_000_000;

/// Recover the receipt total, or `None` when no strategy succeeds.
pub fn extract_amount(text: &NormalizedText) -> Option<AmountCandidate> {
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Parse a captured number such as `"1,00,000.50"`; `None` when it does not
/// parse or falls outside `(0, 1_000_000)`.
pub(crate) fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim().trim_end_matches('.');
    let value = BigDecimal::from_str(cleaned).ok()?;
    in_range(value)
}

pub(crate) fn in_range(value: BigDecimal) -> Option<BigDecimal> {
    (value > BigDecimal::from(0) && value < BigDecimal::from(MAX_AMOUNT)).then_some(value)
}
