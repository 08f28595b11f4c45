//! The four amount strategies, in priority order.

use super::words::decode_words;
use super::{AmountCandidate, AmountSource, in_range, parse_amount};
use crate::engine::NormalizedText;
use bigdecimal::BigDecimal;
use regex::Regex;

/// Phrases meaning "the total", each followed by an optional currency marker
/// and the number. Tried in order against the lower-cased full text.
fn context_patterns() -> [&'static Regex; 5] {
    [
        regex!(r"\b(?:grand\s*)?total[\s:]*(?:amount)?[\s:]*(?:rs\.?|₹|inr)?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"\b(?:net|final)\s*(?:amount|total|payable)[\s:]*(?:rs\.?|₹|inr)?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"\b(?:bill|invoice)\s*(?:amount|total)[\s:]*(?:rs\.?|₹|inr)?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"\b(?:amount\s*)?(?:paid|payable|due)[\s:]*(?:rs\.?|₹|inr)?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"\b(?:total\s*)?(?:charge|sum)s?[\s:]*(?:rs\.?|₹|inr)?\s*(\d[\d,]*(?:\.\d+)?)"),
    ]
}

/// A number next to a currency marker, in either order.
fn currency_patterns() -> [&'static Regex; 7] {
    [
        regex!(r"₹\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"(\d[\d,]*(?:\.\d+)?)\s*₹"),
        regex!(r"\brs\.?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"(\d[\d,]*(?:\.\d+)?)\s*rs\b"),
        regex!(r"\binr\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"\brupees?\s*(\d[\d,]*(?:\.\d+)?)"),
        regex!(r"(\d[\d,]*(?:\.\d+)?)\s*rupees?\b"),
    ]
}

/// Strategy 1: a total/payable phrase immediately followed by a number.
///
/// The first pattern (in list order) with an in-range capture wins, even if a
/// later pattern would have found a larger figure.
pub fn context_amount(text: &NormalizedText) -> Option<AmountCandidate> {
    let haystack = text.full_text_lower();

    for pattern in context_patterns() {
        let found = pattern.captures_iter(haystack).find_map(|caps| parse_amount(caps.get(1)?.as_str()));
        if let Some(value) = found {
            tracing::trace!(pattern = pattern.as_str(), %value, "context amount");
            return Some(AmountCandidate::new(value, AmountSource::Context));
        }
    }

    None
}

/// Strategy 2: the largest currency-tagged figure anywhere in the text.
///
/// On most receipts the grand total is the biggest tagged number; line items
/// and subtotals are smaller. Unusual layouts can defeat this.
pub fn currency_amount(text: &NormalizedText) -> Option<AmountCandidate> {
    let haystack = text.full_text_lower();

    let amounts: Vec<BigDecimal> = currency_patterns()
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(haystack))
        .filter_map(|caps| parse_amount(caps.get(1)?.as_str()))
        .collect();

    tracing::trace!(candidates = amounts.len(), "currency-tagged amounts");

    amounts.into_iter().max().map(|value| AmountCandidate::new(value, AmountSource::CurrencySymbol))
}

/// Strategy 3: "rupees five hundred only".
pub fn word_amount(text: &NormalizedText) -> Option<AmountCandidate> {
    let pattern = regex!(r"\brupees?\s+([a-z][a-z\s-]*)");

    pattern
        .captures_iter(text.full_text_lower())
        .filter_map(|caps| decode_words(caps.get(1)?.as_str()))
        .find_map(|n| in_range(BigDecimal::from(n)))
        .map(|value| AmountCandidate::new(value, AmountSource::WordNumber))
}

/// Strategy 4: the first number of at least 10 on a line mentioning a bill,
/// payment, charge or total.
pub fn fallback_amount(text: &NormalizedText) -> Option<AmountCandidate> {
    let keyword = regex!(r"(?i)bill|payment|charge|total");
    let number = regex!(r"\d[\d,]*(?:\.\d+)?");
    let minimum = BigDecimal::from(10);

    text.lines()
        .iter()
        .filter(|line| keyword.is_match(line))
        .filter_map(|line| parse_amount(number.find(line)?.as_str()))
        .find(|value| *value >= minimum)
        .map(|value| AmountCandidate::new(value, AmountSource::Fallback))
}
