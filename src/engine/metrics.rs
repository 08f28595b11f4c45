//! Engine run metrics.
//!
//! Timings are collected on every run (a handful of `Instant::now()` calls)
//! but only surfaced through the verbose API. They never leak into
//! `ExtractionResult`, which must stay identical across runs.

use crate::api::{ExtractionDetails, ExtractionResult};
use serde::Serialize;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, Serialize)]
pub struct RunMetrics {
    /// Total elapsed time for one extraction.
    pub total: Duration,
    pub normalize: Duration,
    pub amount: Duration,
    pub vendor: Duration,
    pub date: Duration,
    pub time: Duration,
    pub category: Duration,
}

/// Engine output bundled with candidates and timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub result: ExtractionResult,
    pub details: ExtractionDetails,
}
