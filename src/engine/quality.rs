//! Quality scoring and result assembly.
//!
//! The quality score is a weighted completeness metric: it says how much of
//! the expense form the user will still have to fill in by hand, not how
//! likely each value is to be correct.
//!
//! | field                       | weight |
//! |-----------------------------|--------|
//! | amount                      | 40     |
//! | vendor                      | 20     |
//! | date                        | 20     |
//! | category (not the default)  | 10     |
//! | time                        | 10     |

use crate::api::ExtractionResult;
use crate::rules::category::Category;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const AMOUNT_WEIGHT: u8 = 40;
const VENDOR_WEIGHT: u8 = 20;
const DATE_WEIGHT: u8 = 20;
const CATEGORY_WEIGHT: u8 = 10;
const TIME_WEIGHT: u8 = 10;

/// Coarse bucket of the quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => QualityLevel::Excellent,
            60..=79 => QualityLevel::Good,
            40..=59 => QualityLevel::Fair,
            _ => QualityLevel::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Poor => "Poor",
            QualityLevel::Fair => "Fair",
            QualityLevel::Good => "Good",
            QualityLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted presence score in `0..=100`.
pub fn quality_score(has_amount: bool, has_vendor: bool, has_date: bool, has_time: bool, category: Category) -> u8 {
    let mut score = 0;
    if has_amount {
        score += AMOUNT_WEIGHT;
    }
    if has_vendor {
        score += VENDOR_WEIGHT;
    }
    if has_date {
        score += DATE_WEIGHT;
    }
    if category != Category::Miscellaneous {
        score += CATEGORY_WEIGHT;
    }
    if has_time {
        score += TIME_WEIGHT;
    }
    score
}

/// Assemble already-validated field values into an [`ExtractionResult`].
///
/// Performs no validation of its own and never fails.
pub fn aggregate(
    amount: Option<BigDecimal>,
    vendor: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    category: Category,
) -> ExtractionResult {
    let quality_score = quality_score(amount.is_some(), vendor.is_some(), date.is_some(), time.is_some(), category);

    let description = match &amount {
        Some(amount) => format!("{category} - ₹{}", display_amount(amount)),
        None => format!("{category} expense"),
    };

    ExtractionResult {
        amount,
        vendor,
        date,
        time,
        category,
        description,
        quality_score,
        quality_level: QualityLevel::from_score(quality_score),
        date_confidence: None,
    }
}

/// Drop trailing fractional zeros: `1050.00` reads `1050`, `245.50` reads `245.5`.
fn display_amount(amount: &BigDecimal) -> BigDecimal {
    let amount = amount.normalized();
    if amount.is_integer() { amount.with_scale(0) } else { amount }
}
