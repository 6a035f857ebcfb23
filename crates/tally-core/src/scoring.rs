//! # Scoring Module
//!
//! Seven independent point rules and their sum.
//!
//! ## Rules
//! ```text
//! ┌──────────────────────────┬──────────────┬──────────────────────────────┐
//! │ Rule                     │ Points       │ Condition                    │
//! ├──────────────────────────┼──────────────┼──────────────────────────────┤
//! │ retailer_name_points     │ 1 per char   │ ASCII letters and digits     │
//! │ round_total_points       │ 50           │ total has no fraction        │
//! │ quarter_total_points     │ 25           │ total % 0.25 == 0            │
//! │ item_pair_points         │ 5 per pair   │ items / 2                    │
//! │ description_points       │ ⌈price×0.2⌉  │ trimmed bytes % 3 == 0       │
//! │ odd_day_points           │ 6            │ day of month is odd          │
//! │ afternoon_points         │ 10           │ 14:00 < time < 16:00         │
//! └──────────────────────────┴──────────────┴──────────────────────────────┘
//! ```
//!
//! Every rule is a pure function of the [`Receipt`]; none of them fail.
//!
//! ## Example
//! ```rust
//! use chrono::NaiveDate;
//! use tally_core::{score, Item, Money, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Targets".to_string(),
//!     purchased_at: NaiveDate::from_ymd_opt(2022, 1, 2)
//!         .and_then(|d| d.and_hms_opt(13, 13, 0))
//!         .unwrap(),
//!     total: Money::from_cents(125),
//!     items: vec![Item::new("Pepsi - 12-oz", Money::from_cents(125))],
//! };
//!
//! // 7 (retailer) + 25 (quarter multiple)
//! assert_eq!(score(&receipt), 32);
//! ```

use chrono::{Datelike, Timelike};

use crate::money::Money;
use crate::types::{Points, Receipt};

pub const ROUND_TOTAL_POINTS: Points = 50;
pub const QUARTER_TOTAL_POINTS: Points = 25;
pub const ITEM_PAIR_POINTS: Points = 5;
pub const ODD_DAY_POINTS: Points = 6;
pub const AFTERNOON_POINTS: Points = 10;

/// The step a total must divide by for [`quarter_total_points`].
const QUARTER: Money = Money::from_cents(25);

/// Description bonus multiplier, 0.2 as a fraction.
const DESCRIPTION_RATE: (i64, i64) = (1, 5);

/// Afternoon window bounds as (hour, minute, second, nanosecond).
const AFTERNOON_START: (u32, u32, u32, u32) = (14, 0, 0, 0);
const AFTERNOON_END: (u32, u32, u32, u32) = (16, 0, 0, 0);

// =============================================================================
// Rules
// =============================================================================

/// One point per ASCII letter or digit in the retailer name.
///
/// Spaces, punctuation and non-ASCII characters count for nothing.
pub fn retailer_name_points(receipt: &Receipt) -> Points {
    receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as Points
}

/// 50 points when the total has no fractional part.
pub fn round_total_points(receipt: &Receipt) -> Points {
    if receipt.total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points when the total is a multiple of $0.25.
pub fn quarter_total_points(receipt: &Receipt) -> Points {
    if receipt.total.is_multiple_of(QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// 5 points for every two items; an odd trailing item earns nothing.
pub fn item_pair_points(receipt: &Receipt) -> Points {
    (receipt.items.len() / 2) as Points * ITEM_PAIR_POINTS
}

/// For each item whose trimmed description length is a multiple of three,
/// the price times 0.2 rounded up to a whole point.
///
/// Length is measured in UTF-8 bytes, so `"Cé"` counts as three. An
/// all-whitespace description trims to length zero and qualifies.
pub fn description_points(receipt: &Receipt) -> Points {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| {
            let (numerator, denominator) = DESCRIPTION_RATE;
            item.price.ceil_units_scaled(numerator, denominator).max(0) as Points
        })
        .fold(0, Points::saturating_add)
}

/// 6 points when the day of the month is odd.
pub fn odd_day_points(receipt: &Receipt) -> Points {
    if receipt.purchased_at.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points when the purchase is strictly after 14:00 and strictly before
/// 16:00. Exactly 14:00 or 16:00 earns nothing.
pub fn afternoon_points(receipt: &Receipt) -> Points {
    let time = receipt.purchased_at.time();
    let clock = (time.hour(), time.minute(), time.second(), time.nanosecond());
    if clock > AFTERNOON_START && clock < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Per-rule points for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub retailer_name: Points,
    pub round_total: Points,
    pub quarter_total: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl ScoreBreakdown {
    /// Evaluates every rule against `receipt`.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        ScoreBreakdown {
            retailer_name: retailer_name_points(receipt),
            round_total: round_total_points(receipt),
            quarter_total: quarter_total_points(receipt),
            item_pairs: item_pair_points(receipt),
            descriptions: description_points(receipt),
            odd_day: odd_day_points(receipt),
            afternoon: afternoon_points(receipt),
        }
    }

    /// Sum of all rules.
    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Per-rule points for a receipt.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown::for_receipt(receipt)
}

/// Total points for a receipt.
pub fn score(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

// =============================================================================
// Unit Tests
// =============================================================================
