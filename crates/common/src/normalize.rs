//! Wire → internal receipt conversion
//!
//! Normalization does not trust that validation already ran: every string is
//! re-checked and the first failure is reported against its field.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::receipt::{Item, Receipt};
use crate::validation::{
    is_amount, parse_purchase_date, parse_purchase_time, DATE_FORMAT_MESSAGE, ITEMS,
    PURCHASE_DATE, PURCHASE_TIME, TIME_FORMAT_MESSAGE, TOTAL,
};
use crate::wire::{ItemWire, ReceiptWire};

/// Converts validated wire receipts into [`Receipt`] values
pub struct ReceiptNormalizer;

impl ReceiptNormalizer {
    pub fn normalize(wire: &ReceiptWire) -> Result<Receipt> {
        let total = parse_amount(&wire.total).ok_or_else(|| {
            Error::invalid_field(
                TOTAL,
                "Total must be a valid float value represented as a string",
            )
        })?;

        let purchase_date = parse_purchase_date(&wire.purchase_date)
            .ok_or_else(|| Error::invalid_field(PURCHASE_DATE, DATE_FORMAT_MESSAGE))?;

        let purchase_time = parse_purchase_time(&wire.purchase_time)
            .ok_or_else(|| Error::invalid_field(PURCHASE_TIME, TIME_FORMAT_MESSAGE))?;

        let items = wire
            .items
            .iter()
            .map(Self::normalize_item)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Normalized receipt from {} with {} item(s)",
            wire.retailer,
            items.len()
        );

        Ok(Receipt {
            retailer: wire.retailer.clone(),
            total,
            purchase_date,
            purchase_time,
            items,
        })
    }

    fn normalize_item(item: &ItemWire) -> Result<Item> {
        let price = parse_amount(&item.price).ok_or_else(|| {
            Error::invalid_field(
                ITEMS,
                format!(
                    "price invalid for item: {}. price must be a valid float in string format (e.g., '35.99')",
                    item.short_description
                ),
            )
        })?;

        Ok(Item::new(item.short_description.clone(), price))
    }
}

/// Parse an exact, non-negative monetary amount
fn parse_amount(value: &str) -> Option<Decimal> {
    if !is_amount(value) {
        return None;
    }
    Decimal::from_str(value)
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}
