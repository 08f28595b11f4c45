use super::*;
use crate::NormalizedText;

fn amount_of(input: &str) -> Option<(String, AmountSource)> {
    extract_amount(&NormalizedText::new(input)).map(|c| (c.value.to_string(), c.source))
}

#[test]
fn amount_examples_matching() {
    // Array of (expected_value, expected_source, input_string)
    let cases: Vec<(&str, AmountSource, &str)> = vec![
        ("350", AmountSource::Context, "Total: Rs. 350"),
        ("350", AmountSource::Context, "TOTAL 350"),
        ("1250.50", AmountSource::Context, "Grand Total: 1,250.50"),
        ("500", AmountSource::Context, "Item ₹9999\nTotal 500"),
        ("450", AmountSource::Context, "Subtotal ₹120\nTotal ₹450"),
        ("780", AmountSource::Context, "Amount Paid: 780"),
        ("1180", AmountSource::Context, "Net Payable ₹1,180"),
        ("2400", AmountSource::Context, "Invoice Amount: INR 2400"),
        ("65", AmountSource::Context, "Service Charge: 65"),
        ("230", AmountSource::CurrencySymbol, "Coffee ₹120\nSandwich ₹230"),
        ("640", AmountSource::CurrencySymbol, "Paid via INR 640"),
        ("99.50", AmountSource::CurrencySymbol, "Tea 99.50 Rs"),
        ("1500", AmountSource::CurrencySymbol, "Rupees 1500 received"),
        ("500", AmountSource::WordNumber, "Rupees Five Hundred Only"),
        ("120500", AmountSource::WordNumber, "Rupees One Lakh Twenty Thousand Five Hundred Only"),
        ("42", AmountSource::Fallback, "Bill No 42\nThanks"),
        ("25", AmountSource::Fallback, "Bill 5\nPayment 25"),
        ("999999.99", AmountSource::Context, "Total: 999999.99"),
    ];

    for (expected, source, input) in cases {
        assert_eq!(amount_of(input), Some((expected.to_string(), source)), "input '{input}'");
    }
}

#[test]
fn amount_examples_rejected() {
    let cases: Vec<&str> = vec![
        "",
        "Thank you for visiting",
        "Total: 0",
        "Total: 1,000,000",
        "Rs. 2500000",
        "Bill 7",
        "Rupees only",
    ];

    for input in cases {
        assert_eq!(amount_of(input), None, "input '{input}'");
    }
}

#[test]
fn overflowing_word_amount_is_dropped() {
    let input = format!("Rupees {} only", "hundred ".repeat(12));
    assert_eq!(amount_of(&input), None);
}

#[test]
fn context_beats_a_larger_currency_figure() {
    let text = NormalizedText::new("Room ₹9,500\nTotal: 4,200");

    assert_eq!(currency_amount(&text).map(|c| c.value.to_string()), Some("9500".to_string()));
    assert_eq!(context_amount(&text).map(|c| c.value.to_string()), Some("4200".to_string()));
    assert_eq!(extract_amount(&text).map(|c| c.source), Some(AmountSource::Context));
}

#[test]
fn out_of_range_context_falls_through_to_next_strategy() {
    let text = NormalizedText::new("Total: 5,000,000\nParking ₹40");

    let found = extract_amount(&text).expect("currency strategy should apply");
    assert_eq!(found.value, BigDecimal::from(40));
    assert_eq!(found.source, AmountSource::CurrencySymbol);
}

#[test]
fn strategies_are_independent() {
    let text = NormalizedText::new("Rupees Two Thousand Only");

    assert_eq!(context_amount(&text), None);
    assert_eq!(currency_amount(&text), None);
    assert_eq!(fallback_amount(&text), None);
    assert_eq!(word_amount(&text).map(|c| c.value), Some(BigDecimal::from(2000)));
}

#[test]
fn parse_amount_strips_grouping_and_trailing_dot() {
    assert_eq!(parse_amount("1,00,000"), Some(BigDecimal::from(100_000)));
    assert_eq!(parse_amount("350."), Some(BigDecimal::from(350)));
    assert_eq!(parse_amount("0.00"), None);
    assert_eq!(parse_amount("abc"), None);
}
