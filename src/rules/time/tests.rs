use super::matchers::{clock, to_24_hour};
use super::*;
use crate::NormalizedText;

fn time_of(input: &str) -> Option<(String, &'static str)> {
    extract_time(&NormalizedText::new(input)).map(|m| (m.time.format("%H:%M").to_string(), m.rule))
}

#[test]
fn time_examples_matching() {
    // Array of (expected_hhmm, expected_rule, input_string)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("18:21", "<context> h:mm am/pm", "Paid at 06:21 PM"),
        ("18:21", "<context> h:mm am/pm", "Transaction @ 6:21:30 pm"),
        ("09:05", "h:mm am/pm", "9:05 AM"),
        ("18:21", "h:mm am/pm", "6:21 p.m."),
        ("18:21", "<context> h:mm am/pm", "Paid at 6:21 P M"),
        ("18:21", "h:mm am/pm", "6:21 p. m"),
        ("00:15", "h:mm am/pm", "12:15 AM"),
        ("12:40", "h:mm am/pm", "12:40 PM"),
        ("18:21", "Thh:mm:ss", "2025-09-04T18:21:30"),
        ("18:21", "hh:mm:ss", "18:21:30"),
        ("14:05", "hh:mm", "Time: 14:05"),
        ("06:21", "h:mm", "6:21"),
        ("14:30", "hhmm", "Bill 1430"),
        ("09:05", "<context> h:mm", "Time-9:05h"),
    ];

    for (expected, rule, input) in cases {
        assert_eq!(time_of(input), Some((expected.to_string(), rule)), "input '{input}'");
    }
}

#[test]
fn time_examples_rejected() {
    let cases: Vec<&str> = vec![
        "",
        "25:00",
        "10:75",
        "1999",
        "2460",
        "04 Sep 2025",
        "Amount 1200 Rs",
        "Total: ₹ 2450",
        "Order #12345",
    ];

    for input in cases {
        assert_eq!(time_of(input), None, "input '{input}'");
    }
}

#[test]
fn compact_form_skips_date_lines_but_not_later_lines() {
    let text = NormalizedText::new("04 Sep 2025\nToken 1845");
    let found = extract_time(&text).unwrap();

    assert_eq!(found.time.format("%H:%M").to_string(), "18:45");
    assert_eq!(found.line_index, 1);
}

#[test]
fn earlier_line_wins_over_better_format() {
    let text = NormalizedText::new("Printed 10:02\nPaid at 06:21 PM");
    let found = extract_time(&text).unwrap();

    assert_eq!(found.time.format("%H:%M").to_string(), "10:02");
    assert_eq!(found.line_index, 0);
}

#[test]
fn meridiem_conversion() {
    assert_eq!(to_24_hour(12, false), 0);
    assert_eq!(to_24_hour(12, true), 12);
    assert_eq!(to_24_hour(1, true), 13);
    assert_eq!(to_24_hour(11, false), 11);
    assert_eq!(to_24_hour(0, true), 0);
}

#[test]
fn clock_drops_seconds_and_rejects_overflow() {
    assert_eq!(clock(18, 21, 30), NaiveTime::from_hms_opt(18, 21, 0));
    assert_eq!(clock(24, 0, 0), None);
    assert_eq!(clock(23, 60, 0), None);
    assert_eq!(clock(23, 59, 60), None);
}
