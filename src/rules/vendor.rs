//! Merchant name scoring.
//!
//! The vendor is almost always printed near the top of the receipt, often in
//! capitals or with a business suffix. Each of the first lines that survives
//! the skip rules gets a score; the best positive score wins.

use crate::engine::NormalizedText;
use serde::Serialize;

/// Only this many leading lines are considered.
const MAX_LINES: usize = 15;
/// Vendor names are cut to this many characters.
const MAX_VENDOR_CHARS: usize = 50;

const BUSINESS_BONUS: i32 = 50;
const TITLE_CASE_BONUS: i32 = 20;
const ALL_CAPS_BONUS: i32 = 15;
const LENGTH_BONUS: i32 = 10;
const PUNCTUATION_PENALTY: i32 = 10;
const POSITION_PENALTY: i32 = 2;

/// A line considered as the merchant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorCandidate {
    pub text: String,
    pub score: i32,
    /// Index into [`NormalizedText::lines`].
    pub line_position: usize,
}

/// Every line among the first 15 that survives the skip rules, scored, in
/// line order. Scores may be zero or negative.
pub fn vendor_candidates(text: &NormalizedText) -> Vec<VendorCandidate> {
    text.lines()
        .iter()
        .take(MAX_LINES)
        .enumerate()
        .filter(|(_, line)| {
            let skip = is_skipped(line);
            if skip {
                tracing::trace!(line = line.as_str(), "vendor line skipped");
            }
            !skip
        })
        .map(|(i, line)| VendorCandidate { text: truncate(line), score: score_line(line, i), line_position: i })
        .collect()
}

/// Strictly highest positive score; the earliest line wins a tie.
pub(crate) fn best_candidate(candidates: &[VendorCandidate]) -> Option<&VendorCandidate> {
    candidates.iter().filter(|c| c.score > 0).fold(None, |best: Option<&VendorCandidate>, c| match best {
        Some(b) if b.score >= c.score => Some(b),
        _ => Some(c),
    })
}

/// Pick the merchant name, or `None` when no line scores above zero.
pub fn extract_vendor(text: &NormalizedText) -> Option<VendorCandidate> {
    best_candidate(&vendor_candidates(text)).cloned()
}

fn is_skipped(line: &str) -> bool {
    let skip_words = regex!(
        r"(?i)^(?:amount|to|from|paid|payment|paytm|phonepe|gpay|googlepay|upi|bank|ref|reference|date|time|bill|invoice|receipt|thank\w*|total|subtotal|tax|gst|gstin|cgst|sgst|igst|cashier|customer)\b"
    );
    let money_or_long_number = regex!(r"[₹$€£]|\d{4,}");
    let transaction = regex!(r"(?i)transaction|order\s*id|\bref\b");

    let len = line.chars().count();

    skip_words.is_match(line)
        || money_or_long_number.is_match(line)
        || !(3..=60).contains(&len)
        || !line.chars().any(|c| c.is_ascii_alphabetic())
        || transaction.is_match(line)
}

fn score_line(line: &str, index: usize) -> i32 {
    let business = regex!(
        r"(?i)\b(?:limited|ltd|pvt|private|corp|corporation|company|inc|llp|station|stores?|mart|shop|restaurant|hotel|cafe|petrol|pump|mall|center|centre)\b"
    );
    let title_case = regex!(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*$");

    let mut score = 0;

    if business.is_match(line) {
        score += BUSINESS_BONUS;
    }
    if title_case.is_match(line) {
        score += TITLE_CASE_BONUS;
    }
    if line.chars().any(|c| c.is_ascii_uppercase()) && !line.chars().any(|c| c.is_lowercase()) {
        score += ALL_CAPS_BONUS;
    }
    if (5..=40).contains(&line.chars().count()) {
        score += LENGTH_BONUS;
    }
    if line.chars().filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace()).count() > 2 {
        score -= PUNCTUATION_PENALTY;
    }

    score - POSITION_PENALTY * index as i32
}

fn truncate(line: &str) -> String {
    line.chars().take(MAX_VENDOR_CHARS).collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor_of(input: &str) -> Option<String> {
        extract_vendor(&NormalizedText::new(input)).map(|c| c.text)
    }

    #[test]
    fn vendor_examples_matching() {
        // Array of (expected_vendor, input_string)
        let cases: Vec<(Option<&str>, &str)> = vec![
            (Some("SWIGGY"), "SWIGGY\nOrder #12345\n04 Sep 2025"),
            (Some("Sharma Stores"), "Sharma Stores\nMain Road"),
            (Some("HP PETROL PUMP"), "Tax Invoice\nHP PETROL PUMP\nPetrol 45.5 L"),
            (Some("Blue Tokai Cafe"), "Paid to\nBlue Tokai Cafe"),
            (Some("Tokyo Kitchen"), "Tokyo Kitchen"),
            (Some("Reliance Mart"), "Thank you\nReliance Mart"),
            (None, "Total: 350\nThank you"),
            (None, "12345\n₹ 250"),
            (None, "ab"),
            (None, ""),
        ];

        for (expected, input) in cases {
            assert_eq!(vendor_of(input).as_deref(), expected, "input '{input}'");
        }
    }

    #[test]
    fn business_suffix_beats_earlier_plain_line() {
        let text = NormalizedText::new("Welcome\nAnand Sweets Pvt Ltd");
        let candidates = vendor_candidates(&text);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].score, 30);
        assert_eq!(candidates[1].score, 78);
        assert_eq!(extract_vendor(&text).map(|c| c.line_position), Some(1));
    }

    #[test]
    fn ties_go_to_the_earliest_line() {
        let candidates = vec![
            VendorCandidate { text: "A".into(), score: 10, line_position: 0 },
            VendorCandidate { text: "B".into(), score: 10, line_position: 1 },
            VendorCandidate { text: "C".into(), score: -4, line_position: 2 },
        ];

        assert_eq!(best_candidate(&candidates).map(|c| c.text.as_str()), Some("A"));
        assert_eq!(best_candidate(&candidates[2..]), None);
    }

    #[test]
    fn only_first_fifteen_lines_are_scored() {
        let mut input = "---\n".repeat(15);
        input.push_str("Late Store");

        assert!(vendor_candidates(&NormalizedText::new(&input)).is_empty());
    }

    #[test]
    fn long_names_are_truncated() {
        let name = format!("{} Store", "A".repeat(45));
        let found = extract_vendor(&NormalizedText::new(&name)).expect("vendor");

        assert_eq!(found.text.chars().count(), 50);
        assert_eq!(found.text, format!("{} Stor", "A".repeat(45)));
    }
}
