//! Line scanning.
//!
//! Dates and times share one discipline:
//!
//! ```text
//! for line in lines (document order)
//!     signals = SignalMask::scan(line)
//!     for matcher in matchers (priority order)
//!         skip unless signals ⊇ matcher.buckets
//!         for each regex match in the line (left to right)
//!             production(captures) ── Some(value) ──▶ done
//! ```
//!
//! A production returning `None` means "matched but did not validate" and the
//! scan simply moves on. The first validated value wins; nothing is ranked.

use super::trigger::SignalMask;
use crate::api::Options;
use crate::{Hit, Matcher};

/// What a production can see besides its own captures.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    /// The full line the match was found in.
    pub line: &'a str,
    pub signals: SignalMask,
    pub options: &'a Options,
}

/// Return the first validated value produced by `matchers` over `lines`.
pub(crate) fn first_hit<T>(lines: &[String], matchers: &[Matcher<T>], options: &Options) -> Option<Hit<T>> {
    lines.iter().enumerate().find_map(|(line_index, line)| line_hit(line, line_index, matchers, options))
}

/// Try `matchers` in order against a single line.
pub(crate) fn line_hit<T>(line: &str, line_index: usize, matchers: &[Matcher<T>], options: &Options) -> Option<Hit<T>> {
    let signals = SignalMask::scan(line);
    let ctx = ScanContext { line, signals, options };

    for matcher in matchers {
        if !signals.contains(matcher.buckets) {
            continue;
        }

        for caps in matcher.regex.captures_iter(line) {
            match (matcher.production)(&caps, &ctx) {
                Some(value) => {
                    return Some(Hit { value, rule: matcher.name, confidence: matcher.confidence, line_index });
                }
                None => {
                    tracing::trace!(
                        rule = matcher.name,
                        line_index,
                        text = caps.get(0).map_or("", |m| m.as_str()),
                        "match rejected"
                    );
                }
            }
        }
    }

    None
}

/// Parse capture group `idx` as an unsigned integer.
pub(crate) fn group_u32(caps: &regex::Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_digit_matchers() -> Vec<Matcher<u32>> {
        vec![
            matcher! {
                name: "even pair",
                pattern: regex!(r"(\d{2})"),
                buckets: SignalMask::HAS_DIGITS,
                confidence: 10,
                prod: |caps, _ctx| -> Option<u32> {
                    group_u32(caps, 1).filter(|n| n % 2 == 0)
                },
            },
            matcher! {
                name: "colon pair",
                pattern: regex!(r":(\d{2})"),
                buckets: SignalMask::HAS_COLON,
                prod: |caps, _ctx| -> Option<u32> {
                    group_u32(caps, 1)
                },
            },
        ]
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_validated_match_in_document_order_wins() {
        let hit = first_hit(&lines(&["no digits", "11 13 24", "42"]), &two_digit_matchers(), &Options::default())
            .unwrap();
        assert_eq!(hit.value, 24);
        assert_eq!(hit.rule, "even pair");
        assert_eq!(hit.line_index, 1);
        assert_eq!(hit.confidence, 10);
    }

    #[test]
    fn later_matchers_are_tried_when_earlier_ones_fail() {
        let hit = first_hit(&lines(&["x:17"]), &two_digit_matchers(), &Options::default()).unwrap();
        assert_eq!(hit.value, 17);
        assert_eq!(hit.rule, "colon pair");
        assert_eq!(hit.confidence, 0);
    }

    #[test]
    fn nothing_found_is_none() {
        assert!(first_hit(&lines(&["abc", "1 3"]), &two_digit_matchers(), &Options::default()).is_none());
        assert!(first_hit(&[], &two_digit_matchers(), &Options::default()).is_none());
    }
}
