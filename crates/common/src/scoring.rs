//! Points scoring
//!
//! A receipt's score is the sum of seven independent rule contributions.
//! All monetary arithmetic is exact; nothing here can fail once a
//! [`Receipt`] has been normalized.

use chrono::{Datelike, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::receipt::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions to a receipt's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    /// One point per ASCII alphanumeric character in the retailer name
    pub retailer: u64,

    /// Total is a whole dollar amount
    pub round_dollar: u64,

    /// Total is a multiple of 0.25
    pub quarter_multiple: u64,

    /// Every two items on the receipt
    pub item_pairs: u64,

    /// Items whose trimmed description byte length is a multiple of 3
    pub descriptions: u64,

    /// Purchase day is odd
    pub odd_day: u64,

    /// Purchase time is between 14:00 (inclusive) and 16:00 (exclusive)
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: round_dollar_points(receipt.total),
            quarter_multiple: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(receipt.purchase_date.day()),
            afternoon: afternoon_points(receipt.purchase_time),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Score a normalized receipt
pub fn score(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    let cents = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if (cents % Decimal::new(25, 2)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

fn description_points(item: &Item) -> u64 {
    // UTF-8 byte length
    let length = item.short_description.trim().len();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    // Amounts beyond u64 saturate
    (item.price * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(time: NaiveTime) -> u64 {
    if (14..16).contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
