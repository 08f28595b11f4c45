//! Extraction engine.
//!
//! This module is the *internal entry point* for the receipt pipeline. It is
//! split into focused submodules under `src/engine/` while the field-specific
//! heuristics live under `src/rules/**`.
//!
//! ## How the parts work together
//!
//! ```text
//! raw text ── NormalizedText::new        (normalize.rs)
//!                  │  lines + lower-cased full text
//!                  v
//!      ┌───────────┼───────────────┬──────────────┬───────────────┐
//!      v           v               v              v               v
//!   amount      vendor           date           time          category
//!  strategies   scoring     first_hit(..)   first_hit(..)    keyword score
//!  (rules/)     (rules/)     (scan.rs)       (scan.rs)        (rules/)
//!      └───────────┴───────────────┴──────────────┴───────────────┘
//!                                  │
//!                                  v
//!                        aggregate (quality.rs)
//!                                  │
//!                                  v
//!                          ExtractionResult
//! ```
//!
//! The four extractors never talk to each other and never mutate shared
//! state; each is a deterministic function of the normalized text.
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: line splitting, trimming, lower-casing.
//! - `trigger.rs`: cheap per-line signals (`SignalMask`) used to skip matchers
//!   whose regex cannot possibly match a line.
//! - `scan.rs`: the shared date/time scanning discipline (document order, then
//!   matcher order, first validated match wins).
//! - `quality.rs`: weighted completeness score and result assembly.
//! - `metrics.rs`: per-stage timings for verbose runs.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=receiptor=debug` (or `trace`) to see which strategy or
//! matcher settled each field.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/quality.rs"]
mod quality;
#[path = "engine/scan.rs"]
mod scan;
#[path = "engine/trigger.rs"]
mod trigger;

pub use metrics::{RunMetrics, RunResult};
pub use normalize::NormalizedText;
pub use quality::{QualityLevel, aggregate, quality_score};
pub(crate) use scan::{ScanContext, first_hit, group_u32, line_hit};
pub use trigger::SignalMask;

use crate::api::{ExtractionDetails, Options};
use crate::rules::{amount, category, date, time, vendor};
use crate::Field;
use std::time::Instant;

/// Run every stage over `input` and assemble the result plus its details.
///
/// ```text
/// normalize ──▶ amount ──▶ vendor ──▶ date ──▶ time ──▶ category ──▶ aggregate
/// ```
///
/// The stages are independent; the fixed order only matters for the timings.
pub(crate) fn run(input: &str, options: &Options) -> RunResult {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();

    let stage = Instant::now();
    let text = NormalizedText::new(input);
    metrics.normalize = stage.elapsed();

    let stage = Instant::now();
    let amount = amount::extract_amount(&text);
    metrics.amount = stage.elapsed();
    log_field(Field::Amount, amount.as_ref().map(|c| c.value.to_string()));

    let stage = Instant::now();
    let vendor_candidates = vendor::vendor_candidates(&text);
    let vendor = vendor::best_candidate(&vendor_candidates).cloned();
    metrics.vendor = stage.elapsed();
    log_field(Field::Vendor, vendor.as_ref().map(|c| c.text.clone()));

    let stage = Instant::now();
    let date = date::extract_date_with(&text, options);
    metrics.date = stage.elapsed();
    log_field(Field::Date, date.as_ref().map(|d| d.date.to_string()));

    let stage = Instant::now();
    let time = time::extract_time_with(&text, options);
    metrics.time = stage.elapsed();
    log_field(Field::Time, time.as_ref().map(|t| t.time.format("%H:%M").to_string()));

    let stage = Instant::now();
    let category_scores = category::category_scores(&text);
    let category = category_scores.winner();
    metrics.category = stage.elapsed();
    log_field(Field::Category, Some(category.to_string()));

    let mut result = aggregate(
        amount.as_ref().map(|c| c.value.clone()),
        vendor.as_ref().map(|c| c.text.clone()),
        date.as_ref().map(|d| d.date),
        time.as_ref().map(|t| t.time),
        category,
    );
    result.date_confidence = date.as_ref().map(|d| d.confidence);

    metrics.total = started.elapsed();

    tracing::debug!(
        score = result.quality_score,
        level = %result.quality_level,
        lines = text.lines().len(),
        "receipt extracted"
    );

    RunResult {
        result,
        details: ExtractionDetails {
            lines: text.lines().len(),
            amount,
            vendor_candidates,
            date,
            time,
            category_scores,
            metrics,
        },
    }
}

fn log_field(field: Field, value: Option<String>) {
    match value {
        Some(value) => tracing::debug!(field = field.name(), %value, "field extracted"),
        None => tracing::debug!(field = field.name(), "field not found"),
    }
}
