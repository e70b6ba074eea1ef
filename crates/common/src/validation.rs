//! Receipt validator
//!
//! Checks a [`ReceiptWire`] for required fields and syntactic shape. Every
//! field is checked independently and all complaints are collected, so a
//! client sees the complete set of problems in one response.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, FieldErrors, Result};
use crate::wire::{ItemWire, ReceiptWire};

pub const RETAILER: &str = "Retailer";
pub const TOTAL: &str = "Total";
pub const PURCHASE_DATE: &str = "PurchaseDate";
pub const PURCHASE_TIME: &str = "PurchaseTime";
pub const ITEMS: &str = "Items";
pub const PRICE: &str = "Price";
pub const SHORT_DESCRIPTION: &str = "ShortDescription";

pub const DATE_FORMAT_MESSAGE: &str = "PurchaseDate must be in the format YYYY-MM-DD";
pub const TIME_FORMAT_MESSAGE: &str = "PurchaseTime must be in the format HH:MM";

// Unsigned decimal: optional integer digits, optional point, at least one trailing digit
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]+$").expect("Invalid amount regex"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("Invalid time regex"));

/// Fallback complaint for a field without a dedicated message
pub fn invalid_value_message(field: &str) -> String {
    format!("Invalid value for {}", field)
}

/// Whether `value` is an unsigned decimal string such as "35.35", ".5" or "12"
pub fn is_amount(value: &str) -> bool {
    AMOUNT_PATTERN.is_match(value)
}

/// Parse a `YYYY-MM-DD` calendar date, rejecting impossible dates
pub fn parse_purchase_date(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a 24-hour `HH:MM` time of day
pub fn parse_purchase_time(value: &str) -> Option<NaiveTime> {
    if !TIME_PATTERN.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Validator for submitted receipts
pub struct ReceiptValidator;

impl ReceiptValidator {
    /// Collect every complaint about `receipt`
    ///
    /// An empty map means the receipt is accepted.
    pub fn validate(receipt: &ReceiptWire) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if receipt.retailer.is_empty() {
            errors.insert(
                RETAILER.to_string(),
                "Retailer is required and cannot be empty".to_string(),
            );
        }

        if receipt.total.is_empty() {
            errors.insert(
                TOTAL.to_string(),
                "Total is required and cannot be empty".to_string(),
            );
        } else if !is_amount(&receipt.total) {
            errors.insert(
                TOTAL.to_string(),
                "Total must be a valid float value represented as a string".to_string(),
            );
        }

        if receipt.purchase_date.is_empty() {
            errors.insert(
                PURCHASE_DATE.to_string(),
                "PurchaseDate is required and cannot be empty".to_string(),
            );
        } else if parse_purchase_date(&receipt.purchase_date).is_none() {
            errors.insert(PURCHASE_DATE.to_string(), DATE_FORMAT_MESSAGE.to_string());
        }

        if receipt.purchase_time.is_empty() {
            errors.insert(
                PURCHASE_TIME.to_string(),
                "PurchaseTime is required and cannot be empty".to_string(),
            );
        } else if parse_purchase_time(&receipt.purchase_time).is_none() {
            errors.insert(PURCHASE_TIME.to_string(), TIME_FORMAT_MESSAGE.to_string());
        }

        if receipt.items.is_empty() {
            errors.insert(
                ITEMS.to_string(),
                "At least one item is required in the receipt".to_string(),
            );
        }

        for item in &receipt.items {
            Self::validate_item(item, &mut errors);
        }

        errors
    }

    /// Validate and convert the complaint set into a `Result`
    pub fn check(receipt: &ReceiptWire) -> Result<()> {
        let errors = Self::validate(receipt);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    fn validate_item(item: &ItemWire, errors: &mut FieldErrors) {
        if item.short_description.is_empty() {
            errors.insert(
                SHORT_DESCRIPTION.to_string(),
                invalid_value_message(SHORT_DESCRIPTION),
            );
        }

        if item.price.is_empty() {
            errors.insert(
                PRICE.to_string(),
                "Price is required and cannot be empty".to_string(),
            );
        } else if !is_amount(&item.price) {
            errors.insert(
                PRICE.to_string(),
                "Price must be a valid float value represented as a string".to_string(),
            );
        }
    }
}
