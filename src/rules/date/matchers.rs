use super::months::month_number;
use crate::engine::{ScanContext, SignalMask, group_u32};
use crate::Matcher;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Captures;

/// Date matchers in priority order.
///
/// Numeric forms insist on a non-digit (or the line start) before the first
/// group so a longer number is never read from its middle.
pub(crate) static DATE_MATCHERS: Lazy<Vec<Matcher<NaiveDate>>> = Lazy::new(|| {
    vec![
        matcher! {
            name: "dd month yyyy",
            pattern: regex!(r"(?i)(?:^|\D)(\d{1,2})(?:st|nd|rd|th)?[\s/\-]+([a-z]{3,}\.?)[\s/\-,]+(\d{4}|\d{2})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_LETTERS,
            confidence: 90,
            prod: |caps, ctx| -> Option<NaiveDate> {
                let month = named_month(caps, 2, ctx)?;
                ymd(group_u32(caps, 3)?, month, group_u32(caps, 1)?)
            },
        },
        matcher! {
            name: "month dd yyyy",
            pattern: regex!(r"(?i)\b([a-z]{3,}\.?)\s+(\d{1,2})(?:st|nd|rd|th)?[,\s]+(\d{4}|\d{2})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_LETTERS,
            confidence: 90,
            prod: |caps, ctx| -> Option<NaiveDate> {
                let month = named_month(caps, 1, ctx)?;
                ymd(group_u32(caps, 3)?, month, group_u32(caps, 2)?)
            },
        },
        matcher! {
            name: "dd/mm/yyyy",
            pattern: regex!(r"(?:^|\D)(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_SEPARATOR,
            confidence: 70,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 3)?, group_u32(caps, 2)?, group_u32(caps, 1)?)
            },
        },
        matcher! {
            name: "dd/mm/yy",
            pattern: regex!(r"(?:^|\D)(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_SEPARATOR,
            confidence: 60,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 3)?, group_u32(caps, 2)?, group_u32(caps, 1)?)
            },
        },
        matcher! {
            name: "yyyy/mm/dd",
            pattern: regex!(r"(?:^|\D)(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_SEPARATOR,
            confidence: 85,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 1)?, group_u32(caps, 2)?, group_u32(caps, 3)?)
            },
        },
        matcher! {
            name: "yyyymmdd",
            pattern: regex!(r"(?:^|\D)(\d{4})(\d{2})(\d{2})(?:[^\dT]|$)"),
            buckets: SignalMask::HAS_DIGITS,
            confidence: 50,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 1)?, group_u32(caps, 2)?, group_u32(caps, 3)?)
            },
        },
        matcher! {
            name: "iso datetime",
            pattern: regex!(r"(\d{4})-(\d{2})-(\d{2})T"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_SEPARATOR,
            confidence: 85,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 1)?, group_u32(caps, 2)?, group_u32(caps, 3)?)
            },
        },
        matcher! {
            name: "<context> dd/mm/yyyy",
            pattern: regex!(r"(?i)(?:paid|date|on|at)\D*?(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_LETTERS | SignalMask::HAS_SEPARATOR,
            confidence: 95,
            prod: |caps, _ctx| -> Option<NaiveDate> {
                ymd(group_u32(caps, 3)?, group_u32(caps, 2)?, group_u32(caps, 1)?)
            },
        },
        matcher! {
            name: "<context> dd month yyyy",
            pattern: regex!(r"(?i)(?:paid|date|on|at)\D*?(\d{1,2})\s+([a-z]{3,}\.?)\s+(\d{4}|\d{2})(?:\D|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_LETTERS,
            confidence: 95,
            prod: |caps, ctx| -> Option<NaiveDate> {
                let month = named_month(caps, 2, ctx)?;
                ymd(group_u32(caps, 3)?, month, group_u32(caps, 1)?)
            },
        },
    ]
});

fn named_month(caps: &Captures<'_>, idx: usize, ctx: &ScanContext<'_>) -> Option<u32> {
    month_number(caps.get(idx)?.as_str(), ctx.options.correct_month_ocr)
}

/// Build a calendar date; two-digit years land in the 2000s and anything
/// outside 2000-2099 or absent from the calendar is rejected.
pub(crate) fn ymd(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = if year < 100 { year + 2000 } else { year };

    if !(2000..=2099).contains(&year) || !(1..=31).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
}
