use crate::engine::{SignalMask, group_u32};
use crate::rules::date::line_has_date;
use crate::Matcher;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Captures;

/// Time matchers in priority order.
pub(crate) static TIME_MATCHERS: Lazy<Vec<Matcher<NaiveTime>>> = Lazy::new(|| {
    vec![
        matcher! {
            name: "<context> h:mm am/pm",
            pattern: regex!(r"(?i)(?:paid|payment|transaction|time|at|on)\s*(?:at|@)?\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([ap])\.?\s*m\b"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON | SignalMask::HAS_AMPM,
            confidence: 95,
            prod: |caps, _ctx| -> Option<NaiveTime> { twelve_hour(caps) },
        },
        matcher! {
            name: "h:mm am/pm",
            pattern: regex!(r"(?i)(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([ap])\.?\s*m\b"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON | SignalMask::HAS_AMPM,
            confidence: 90,
            prod: |caps, _ctx| -> Option<NaiveTime> { twelve_hour(caps) },
        },
        matcher! {
            name: "Thh:mm:ss",
            pattern: regex!(r"T(\d{2}):(\d{2}):(\d{2})"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON,
            confidence: 85,
            prod: |caps, _ctx| -> Option<NaiveTime> { clock(group_u32(caps, 1)?, group_u32(caps, 2)?, group_u32(caps, 3)?) },
        },
        matcher! {
            name: "hh:mm:ss",
            pattern: regex!(r"(?:^|\s)(\d{2}):(\d{2}):(\d{2})(?:\s|$)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON,
            confidence: 80,
            prod: |caps, _ctx| -> Option<NaiveTime> { clock(group_u32(caps, 1)?, group_u32(caps, 2)?, group_u32(caps, 3)?) },
        },
        matcher! {
            name: "hh:mm",
            pattern: regex!(r"(?:^|\s)(\d{2}):(\d{2})(?:\s|$|,)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON,
            confidence: 75,
            prod: |caps, _ctx| -> Option<NaiveTime> { clock(group_u32(caps, 1)?, group_u32(caps, 2)?, 0) },
        },
        matcher! {
            name: "h:mm",
            pattern: regex!(r"(\d{1,2}):(\d{2})(?:\s|$|,)"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_COLON,
            confidence: 60,
            prod: |caps, _ctx| -> Option<NaiveTime> { clock(group_u32(caps, 1)?, group_u32(caps, 2)?, 0) },
        },
        matcher! {
            name: "hhmm",
            pattern: regex!(r"(?:^|\s)(\d{2})(\d{2})(?:\s|$)"),
            buckets: SignalMask::HAS_DIGITS,
            confidence: 40,
            prod: |caps, ctx| -> Option<NaiveTime> {
                if ctx.signals.contains(SignalMask::HAS_CURRENCY) || line_has_date(ctx.line, ctx.options) {
                    return None;
                }
                clock(group_u32(caps, 1)?, group_u32(caps, 2)?, 0)
            },
        },
        matcher! {
            name: "<context> h:mm",
            pattern: regex!(r"(?i)(?:time|at|on)\s*[:\-]?\s*(\d{1,2}):(\d{2})"),
            buckets: SignalMask::HAS_DIGITS | SignalMask::HAS_LETTERS | SignalMask::HAS_COLON,
            confidence: 70,
            prod: |caps, _ctx| -> Option<NaiveTime> { clock(group_u32(caps, 1)?, group_u32(caps, 2)?, 0) },
        },
    ]
});

/// Groups 1-3 are h, mm, optional ss; group 4 is the meridiem letter.
fn twelve_hour(caps: &Captures<'_>) -> Option<NaiveTime> {
    let hour = group_u32(caps, 1)?;
    let minute = group_u32(caps, 2)?;
    let second = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let pm = caps.get(4)?.as_str().eq_ignore_ascii_case("p");

    clock(to_24_hour(hour, pm), minute, second)
}

/// 12 AM is midnight, 12 PM is noon, PM adds 12 to 1-11.
pub(crate) fn to_24_hour(hour: u32, pm: bool) -> u32 {
    match (hour, pm) {
        (12, false) => 0,
        (1..=11, true) => hour + 12,
        _ => hour,
    }
}

/// Validate and build a time of day; seconds are checked, then dropped.
pub(crate) fn clock(hour: u32, minute: u32, second: u32) -> Option<NaiveTime> {
    if hour >= 24 || minute >= 60 || second >= 60 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}
