//! Spelled-out amounts ("Rupees One Lakh Twenty Thousand Five Hundred Only").

use once_cell::sync::Lazy;
use std::collections::HashMap;

// Maps
/// Words that add to the current group.
static UNITS_MAP: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fourty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ])
});

/// Words that close the current group into the running total.
static SCALES_MAP: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("thousand", 1_000),
        ("lakh", 100_000),
        ("lakhs", 100_000),
        ("lac", 100_000),
        ("lacs", 100_000),
        ("crore", 10_000_000),
        ("crores", 10_000_000),
    ])
});

/// Decode the words following "rupees".
///
/// `hundred` multiplies the current group; `thousand`, `lakh` and `crore`
/// multiply it and add it to the total. `and` is ignored, `only` or the first
/// unknown word ends the phrase. Returns `None` when nothing positive was
/// decoded or the value does not fit in a `u64`.
///
/// ```text
/// one lakh  twenty thousand  five hundred
/// 1 ×1e5 →  20 ×1e3        → 5 ×100
/// total: 100000 → 120000 → (group 500) → 120500
/// ```
pub(crate) fn decode_words(phrase: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut group: u64 = 0;

    for word in phrase.split(|c: char| c.is_whitespace() || c == '-').filter(|w| !w.is_empty()) {
        if word == "and" {
            continue;
        }
        if word == "only" {
            break;
        }

        if let Some(&n) = UNITS_MAP.get(word) {
            group = group.checked_add(n)?;
        } else if word == "hundred" || word == "hundreds" {
            group = group.max(1).checked_mul(100)?;
        } else if let Some(&scale) = SCALES_MAP.get(word) {
            total = group.max(1).checked_mul(scale).and_then(|n| total.checked_add(n))?;
            group = 0;
        } else {
            break;
        }
    }

    let total = total.checked_add(group)?;
    (total > 0).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_examples_decoding() {
        let hundreds = "hundred ".repeat(12);

        // Array of (expected_value, phrase)
        let cases: Vec<(Option<u64>, &str)> = vec![
            (Some(500), "five hundred only"),
            (Some(500), "five hundred"),
            (Some(100), "hundred only"),
            (Some(1_000), "thousand only"),
            (Some(2_500), "two thousand five hundred only"),
            (Some(120_500), "one lakh twenty thousand five hundred only"),
            (Some(120_000), "one hundred twenty thousand only"),
            (Some(45), "forty-five only"),
            (Some(345), "three hundred and forty five only"),
            (Some(2_00_00_000), "two crore only"),
            (Some(75), "seventy five\nthank you"),
            (Some(12), "twelve only fifty"),
            (None, "only"),
            (None, "zero only"),
            (None, "paid via upi"),
            (None, hundreds.as_str()),
        ];

        for (expected, phrase) in cases {
            assert_eq!(decode_words(phrase), expected, "phrase '{phrase}'");
        }
    }
}
