use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Payment kinds offered by the add/edit dialogs, as stored by the backend.
pub const PAYMENT_KINDS: [&str; 4] = [
    "tarjeta_credito",
    "tarjeta_debito",
    "paypal",
    "transferencia",
];

/// A stored customer payment method.
///
/// The card number and CVV never leave the server unmasked; templates render
/// [`PaymentMethod::masked_card_number`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Unique identifier of the payment method.
    pub id: i32,
    /// Customer owning the method.
    pub customer_id: i32,
    /// One of [`PAYMENT_KINDS`], or whatever the backend stored.
    pub kind: String,
    /// Name printed on the card.
    pub holder_name: String,
    #[serde(skip_serializing)]
    pub card_number: String,
    /// Card expiry date.
    pub expires_on: NaiveDate,
    #[serde(skip_serializing)]
    pub cvv: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl PaymentMethod {
    /// Card number with everything except the last four characters starred out.
    pub fn masked_card_number(&self) -> String {
        mask_card_number(&self.card_number)
    }
}

/// Star out all but the last four characters of `number`.
pub fn mask_card_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{}", "*".repeat(hidden), tail)
}

impl Searchable for PaymentMethod {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.kind.clone(),
            self.holder_name.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentMethod {
    pub customer_id: i32,
    pub kind: String,
    pub holder_name: String,
    pub card_number: String,
    pub expires_on: NaiveDate,
    pub cvv: String,
    pub modified_by: String,
}

/// Replacement values; `None` card data keeps what the backend already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePaymentMethod {
    pub customer_id: i32,
    pub kind: String,
    pub holder_name: String,
    pub card_number: Option<String>,
    pub expires_on: NaiveDate,
    pub cvv: Option<String>,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdatePaymentMethod {
    pub fn apply_to(self, current: PaymentMethod) -> PaymentMethod {
        PaymentMethod {
            id: current.id,
            customer_id: self.customer_id,
            kind: self.kind,
            holder_name: self.holder_name,
            card_number: self.card_number.unwrap_or(current.card_number),
            expires_on: self.expires_on,
            cvv: self.cvv.unwrap_or(current.cvv),
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method() -> PaymentMethod {
        PaymentMethod {
            id: 3,
            customer_id: 8,
            kind: "tarjeta_credito".to_string(),
            holder_name: "Ana Torres".to_string(),
            card_number: "4111111111111111".to_string(),
            expires_on: NaiveDate::from_ymd_opt(2027, 12, 31).expect("date"),
            cvv: "123".to_string(),
            status: RecordStatus::Active,
            modified_by: "luis".to_string(),
        }
    }

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(method().masked_card_number(), "************1111");
        assert_eq!(mask_card_number("123"), "123");
        assert_eq!(mask_card_number(""), "");
    }

    #[test]
    fn serialization_omits_card_secrets() {
        let value = serde_json::to_value(method()).expect("serialize");

        assert!(value.get("card_number").is_none());
        assert!(value.get("cvv").is_none());
        assert_eq!(
            value.get("holder_name").and_then(|v| v.as_str()),
            Some("Ana Torres")
        );
    }

    #[test]
    fn update_without_card_data_keeps_existing() {
        let update = UpdatePaymentMethod {
            customer_id: 8,
            kind: "paypal".to_string(),
            holder_name: "Ana Torres".to_string(),
            card_number: None,
            expires_on: NaiveDate::from_ymd_opt(2028, 1, 31).expect("date"),
            cvv: None,
            status: RecordStatus::Active,
            modified_by: "eva".to_string(),
        };

        let merged = update.apply_to(method());

        assert_eq!(merged.card_number, "4111111111111111");
        assert_eq!(merged.cvv, "123");
        assert_eq!(merged.kind, "paypal");
    }
}
