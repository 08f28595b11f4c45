//! Field heuristics.
//!
//! One module per receipt field. Each exposes a pure function over
//! [`NormalizedText`](crate::NormalizedText) returning `Option<_>` (or the
//! default category), plus the candidate type carrying provenance.

pub mod amount;
pub mod category;
pub mod date;
pub mod time;
pub mod vendor;
