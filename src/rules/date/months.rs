//! Month-name lookup with OCR repair.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Spellings the fuzzy pass compares against, with their month number.
/// Shorter names sit one letter off ordinary words ("sent", "duly", "match").
const FUZZY_TARGETS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Letters OCR commonly swaps in short month names (p→n, c→e, u→n, ...).
static OCR_CONFUSIONS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("sen", 9),
        ("seo", 9),
        ("oet", 10),
        ("oot", 10),
        ("deo", 12),
        ("dee", 12),
        ("aup", 8),
        ("ang", 8),
        ("jnn", 1),
        ("jau", 1),
        ("nay", 5),
        ("juu", 6),
        ("jnl", 7),
        ("nop", 11),
        ("nou", 11),
        ("nar", 3),
        ("fen", 2),
    ])
});

/// Month number (1-12) for a word such as `"Sep"`, `"sept."` or `"September"`.
///
/// A word of at least three letters matches when it is a prefix of a full
/// month name. With `correct_ocr`, known OCR confusions (`"Oet"`) and
/// same-length spellings one letter off a month name of six or more letters
/// (`"Octobcr"`) are accepted too.
pub(crate) fn month_number(word: &str, correct_ocr: bool) -> Option<u32> {
    let word: String = word.chars().filter(|c| *c != '.').flat_map(char::to_lowercase).collect();

    if word.len() < 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    if let Some(i) = MONTHS.iter().position(|m| m.starts_with(word.as_str())) {
        return Some(i as u32 + 1);
    }

    if !correct_ocr {
        return None;
    }

    if let Some(&month) = OCR_CONFUSIONS.get(word.as_str()) {
        tracing::trace!(word = word.as_str(), month, "month OCR confusion repaired");
        return Some(month);
    }

    if word.len() < 6 {
        return None;
    }

    FUZZY_TARGETS.iter().find(|(target, _)| one_substitution(&word, target)).map(|&(target, month)| {
        tracing::trace!(word = word.as_str(), corrected = target, "month fuzzy-matched");
        month
    })
}

fn one_substitution(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_examples_matching() {
        // Array of (expected_month, word, correct_ocr)
        let cases: Vec<(Option<u32>, &str, bool)> = vec![
            (Some(9), "Sep", false),
            (Some(9), "sept", false),
            (Some(9), "Sept.", false),
            (Some(9), "SEPTEMBER", false),
            (Some(5), "may", false),
            (Some(3), "Mar", false),
            (Some(3), "march", false),
            (Some(12), "dec.", false),
            (None, "ju", false),
            (None, "sen", false),
            (None, "total", false),
            (Some(9), "sen", true),
            (Some(10), "Oet", true),
            (Some(2), "fen.", true),
            (Some(10), "octobcr", true),
            (Some(9), "septembcr", true),
            (Some(8), "augnst", true),
            (None, "julv", true),
            (None, "sent", true),
            (None, "duly", true),
            (None, "match", true),
            (None, "xyz", true),
            (None, "time", true),
            (None, "date", true),
            (None, "paid", true),
        ];

        for (expected, word, correct_ocr) in cases {
            assert_eq!(month_number(word, correct_ocr), expected, "word '{word}' (ocr: {correct_ocr})");
        }
    }
}
