//! Form payloads submitted by the add/edit dialogs.
//!
//! Every form derives `Deserialize` and `Validate` and converts into a domain
//! payload through an `into_*` method that sanitizes text and parses money,
//! dates and statuses.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::{OrderStage, RecordStatus};

pub mod auth;
pub mod cart_details;
pub mod carts;
pub mod customers;
pub mod inventory;
pub mod invoice_details;
pub mod invoices;
pub mod login_security;
pub mod order_details;
pub mod order_history;
pub mod orders;
pub mod payment_methods;
pub mod product_purchases;
pub mod product_reviews;
pub mod products;
pub mod promotion_products;
pub mod promotions;
pub mod roles;
pub mod suppliers;
pub mod surfaces;
pub mod users;

/// Maximum length of names and other short text inputs.
pub(crate) const NAME_MAX_LEN: u64 = 128;
/// Maximum length of descriptions, comments and addresses.
pub(crate) const TEXT_MAX_LEN: u64 = 2048;

pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while converting a submitted form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("invalid amount for {field}: `{value}`")]
    InvalidAmount { field: &'static str, value: String },
    #[error("invalid date for {field}: `{value}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid status `{0}`")]
    InvalidStatus(String),
    #[error("invalid order stage `{0}`")]
    InvalidStage(String),
    #[error("invalid payment type `{0}`")]
    InvalidPaymentKind(String),
    #[error("card number must have 13 to 19 digits")]
    InvalidCardNumber,
    #[error("cvv must have 3 or 4 digits")]
    InvalidCvv,
    #[error("end date must not precede the start date")]
    DateRange,
}

/// Identifier of the record being edited together with its new values.
#[derive(Debug)]
pub struct EditPayload<T> {
    pub id: i32,
    pub update: T,
}

/// Deserialize blank form inputs as `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Trim, collapse runs of whitespace and drop control characters.
pub fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize each line, dropping leading/trailing blank lines and repeated
/// blank lines in between.
pub fn sanitize_multiline_text(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() && result.last().is_none_or(|last| last.is_empty()) {
            continue;
        }
        result.push(line);
    }
    while matches!(result.last(), Some(line) if line.is_empty()) {
        result.pop();
    }

    result.join("\n")
}

/// Sanitized text that must not end up empty.
pub(crate) fn required_text(value: &str, field: &'static str) -> FormResult<String> {
    let sanitized = sanitize_inline_text(value);
    if sanitized.is_empty() {
        return Err(FormError::EmptyField(field));
    }
    Ok(sanitized)
}

/// Sanitized text, `None` when blank.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_inline_text)
        .filter(|text| !text.is_empty())
}

/// Parse a non-negative decimal amount. A comma is accepted as the decimal
/// separator.
pub(crate) fn parse_amount(value: &str, field: &'static str) -> FormResult<Decimal> {
    let trimmed = value.trim();
    let invalid = || FormError::InvalidAmount {
        field,
        value: trimmed.to_string(),
    };

    let amount = Decimal::from_str(&trimmed.replace(',', ".")).map_err(|_| invalid())?;
    if amount.is_sign_negative() {
        return Err(invalid());
    }
    Ok(amount)
}

/// Like [`parse_amount`] but also bounded above.
pub(crate) fn parse_bounded_amount(
    value: &str,
    field: &'static str,
    max: Decimal,
) -> FormResult<Decimal> {
    let amount = parse_amount(value, field)?;
    if amount > max {
        return Err(FormError::InvalidAmount {
            field,
            value: value.trim().to_string(),
        });
    }
    Ok(amount)
}

/// Parse an HTML `date` input (`YYYY-MM-DD`).
pub(crate) fn parse_date(value: &str, field: &'static str) -> FormResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}

pub(crate) fn parse_status(value: &str) -> FormResult<RecordStatus> {
    value
        .parse()
        .map_err(|_| FormError::InvalidStatus(value.trim().to_string()))
}

pub(crate) fn parse_stage(value: &str) -> FormResult<OrderStage> {
    value
        .parse()
        .map_err(|_| FormError::InvalidStage(value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_is_collapsed() {
        assert_eq!(sanitize_inline_text("  Ana \t  Torres\u{7}  "), "Ana Torres");
    }

    #[test]
    fn multiline_text_keeps_single_blank_lines() {
        assert_eq!(
            sanitize_multiline_text("\n\n  Muy  bueno \n\n\n Volvería \n\n"),
            "Muy bueno\n\nVolvería"
        );
    }

    #[test]
    fn amounts_must_be_non_negative_decimals() {
        assert_eq!(parse_amount(" 12,50 ", "total").expect("amount"), Decimal::new(125, 1));
        assert_eq!(parse_amount("0", "total").expect("amount"), Decimal::ZERO);
        assert!(matches!(
            parse_amount("-1", "total"),
            Err(FormError::InvalidAmount { field: "total", .. })
        ));
        assert!(parse_amount("doce", "total").is_err());
        assert!(parse_bounded_amount("100.5", "discount", Decimal::ONE_HUNDRED).is_err());
    }

    #[test]
    fn dates_come_from_date_inputs() {
        assert_eq!(
            parse_date("2024-12-01", "start").expect("date"),
            NaiveDate::from_ymd_opt(2024, 12, 1).expect("date")
        );
        assert!(matches!(
            parse_date("01/12/2024", "start"),
            Err(FormError::InvalidDate { field: "start", .. })
        ));
    }

    #[test]
    fn status_and_stage_are_parsed() {
        assert_eq!(parse_status("inactivo").expect("status"), RecordStatus::Inactive);
        assert!(matches!(parse_status("x"), Err(FormError::InvalidStatus(_))));
        assert_eq!(parse_stage("shipped").expect("stage"), OrderStage::Shipped);
        assert!(matches!(parse_stage("perdido"), Err(FormError::InvalidStage(_))));
    }
}
