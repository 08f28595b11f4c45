//! Trigger scanning (line pre-classification).
//!
//! Before any matcher regex runs against a line, the scanner computes a few
//! cheap booleans about it ("contains digits", "contains a colon", ...). Each
//! matcher declares the signals its regex cannot match without, and the
//! scanner skips it on lines that lack them.
//!
//! ## Design notes
//!
//! - A declared bucket must be a *necessary* condition for the matcher's regex.
//!   Gating then only saves work; it can never change which value wins.
//! - `HAS_CURRENCY` is the exception: it is not used for gating, only as a
//!   guard inside productions (a line carrying a price is not a clock).
//! - The scan uses ASCII lowercasing since every trigger is ASCII English.

bitflags::bitflags! {
    /// Coarse per-line signals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SignalMask: u32 {
        const HAS_DIGITS    = 1 << 0;
        const HAS_LETTERS   = 1 << 1;
        const HAS_COLON     = 1 << 2;
        const HAS_AMPM      = 1 << 3;
        const HAS_SEPARATOR = 1 << 4;
        const HAS_CURRENCY  = 1 << 5;
    }
}

impl SignalMask {
    /// Scan a single line.
    pub fn scan(line: &str) -> Self {
        let mut signals = SignalMask::empty();
        let lower = line.to_ascii_lowercase();

        if line.bytes().any(|b| b.is_ascii_digit()) {
            signals |= SignalMask::HAS_DIGITS;
        }

        if line.bytes().any(|b| b.is_ascii_alphabetic()) {
            signals |= SignalMask::HAS_LETTERS;
        }

        if line.contains(':') {
            signals |= SignalMask::HAS_COLON;
        }

        // Same meridiem test the 12-hour matchers use, so "P M" and "p. m" count.
        if regex!(r"(?i)[ap]\.?\s*m\b").is_match(line) {
            signals |= SignalMask::HAS_AMPM;
        }

        if line.contains(['/', '-', '.']) {
            signals |= SignalMask::HAS_SEPARATOR;
        }

        const CURRENCY_MARKERS: &[&str] = &["₹", "rs.", "inr", "rupee"];
        if CURRENCY_MARKERS.iter().any(|m| lower.contains(m))
            || lower.split(|c: char| !c.is_ascii_alphanumeric()).any(|w| w == "rs")
        {
            signals |= SignalMask::HAS_CURRENCY;
        }

        signals
    }
}
