use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Normalized receipt, ready for scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub retailer: String,
    pub total: Decimal,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
}

/// Normalized line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub short_description: String,
    pub price: Decimal,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }
}
