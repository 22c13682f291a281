use serde::Deserialize;
use validator::Validate;

use crate::domain::payment_method::{NewPaymentMethod, PAYMENT_KINDS, UpdatePaymentMethod};
use crate::forms::{
    EditPayload, FormError, FormResult, NAME_MAX_LEN, empty_string_as_none, parse_date,
    parse_status, required_text,
};

/// Form payload emitted when registering a payment method.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPaymentMethodForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    /// One of [`PAYMENT_KINDS`].
    pub kind: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub holder_name: String,
    pub card_number: String,
    /// Expiry from a `date` input.
    pub expires_on: String,
    pub cvv: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddPaymentMethodForm {
    pub fn into_new_payment_method(self) -> FormResult<NewPaymentMethod> {
        self.validate()?;

        Ok(NewPaymentMethod {
            customer_id: self.customer_id,
            kind: parse_kind(&self.kind)?,
            holder_name: required_text(&self.holder_name, "holder name")?,
            card_number: parse_card_number(&self.card_number)?,
            expires_on: parse_date(&self.expires_on, "expiry date")?,
            cvv: parse_cvv(&self.cvv)?,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

/// Form payload emitted when editing a payment method.
///
/// Card number and CVV are never pre-filled; leaving them blank keeps the
/// stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct EditPaymentMethodForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub kind: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub holder_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub card_number: Option<String>,
    pub expires_on: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cvv: Option<String>,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditPaymentMethodForm {
    pub fn into_update_payment_method(self) -> FormResult<EditPayload<UpdatePaymentMethod>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdatePaymentMethod {
                customer_id: self.customer_id,
                kind: parse_kind(&self.kind)?,
                holder_name: required_text(&self.holder_name, "holder name")?,
                card_number: self.card_number.as_deref().map(parse_card_number).transpose()?,
                expires_on: parse_date(&self.expires_on, "expiry date")?,
                cvv: self.cvv.as_deref().map(parse_cvv).transpose()?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}

fn parse_kind(value: &str) -> FormResult<String> {
    let kind = value.trim().to_lowercase();
    if PAYMENT_KINDS.contains(&kind.as_str()) {
        Ok(kind)
    } else {
        Err(FormError::InvalidPaymentKind(value.trim().to_string()))
    }
}

/// Digits only, spaces and dashes allowed as separators.
fn parse_card_number(value: &str) -> FormResult<String> {
    let digits: String = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-'))
        .collect();
    if (13..=19).contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(FormError::InvalidCardNumber)
    }
}

fn parse_cvv(value: &str) -> FormResult<String> {
    let cvv = value.trim();
    if (3..=4).contains(&cvv.len()) && cvv.chars().all(|ch| ch.is_ascii_digit()) {
        Ok(cvv.to_string())
    } else {
        Err(FormError::InvalidCvv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_form() -> AddPaymentMethodForm {
        AddPaymentMethodForm {
            customer_id: 1,
            kind: "Tarjeta_Credito".into(),
            holder_name: "Ana Torres".into(),
            card_number: "4111 1111-1111 1111".into(),
            expires_on: "2027-12-31".into(),
            cvv: "123".into(),
            modified_by: "eva".into(),
        }
    }

    #[test]
    fn add_form_normalizes_card_data() {
        let method = add_form().into_new_payment_method().expect("conversion");

        assert_eq!(method.kind, "tarjeta_credito");
        assert_eq!(method.card_number, "4111111111111111");
        assert_eq!(method.cvv, "123");
    }

    #[test]
    fn add_form_rejects_unknown_kind_and_bad_card() {
        let mut form = add_form();
        form.kind = "bitcoin".into();
        assert!(matches!(
            form.into_new_payment_method(),
            Err(FormError::InvalidPaymentKind(kind)) if kind == "bitcoin"
        ));

        let mut form = add_form();
        form.card_number = "4111".into();
        assert!(matches!(
            form.into_new_payment_method(),
            Err(FormError::InvalidCardNumber)
        ));

        let mut form = add_form();
        form.cvv = "12a".into();
        assert!(matches!(
            form.into_new_payment_method(),
            Err(FormError::InvalidCvv)
        ));
    }

    #[test]
    fn edit_form_keeps_card_data_optional() {
        let form = EditPaymentMethodForm {
            id: 3,
            customer_id: 1,
            kind: "paypal".into(),
            holder_name: "Ana Torres".into(),
            card_number: None,
            expires_on: "2028-01-31".into(),
            cvv: None,
            status: "activo".into(),
            modified_by: "eva".into(),
        };

        let payload = form.into_update_payment_method().expect("conversion");

        assert!(payload.update.card_number.is_none());
        assert!(payload.update.cvv.is_none());
    }

    #[test]
    fn edit_form_reports_malformed_replacement_card() {
        let form = EditPaymentMethodForm {
            id: 3,
            customer_id: 1,
            kind: "tarjeta_debito".into(),
            holder_name: "Ana Torres".into(),
            card_number: Some("4111-abcd".into()),
            expires_on: "2028-01-31".into(),
            cvv: None,
            status: "activo".into(),
            modified_by: "eva".into(),
        };

        let err = form.into_update_payment_method().expect_err("malformed card");

        assert!(matches!(err, FormError::InvalidCardNumber));
        assert_eq!(err.to_string(), "card number must have 13 to 19 digits");
    }
}
