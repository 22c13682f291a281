use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, parse_status, required_text,
    sanitize_inline_text,
};

/// Maximum length accepted for phone numbers.
const PHONE_MAX_LEN: u64 = 32;

/// Form payload emitted when submitting the "Add customer" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerForm {
    /// User account the profile belongs to.
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub last_name: String,
    #[validate(length(max = PHONE_MAX_LEN))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: String,
}

impl AddCustomerForm {
    /// Validates and sanitizes the payload into a domain `NewCustomer`.
    pub fn into_new_customer(self) -> FormResult<NewCustomer> {
        self.validate()?;

        Ok(NewCustomer {
            user_id: self.user_id,
            first_name: required_text(&self.first_name, "first name")?,
            last_name: sanitize_inline_text(&self.last_name),
            phone: sanitize_inline_text(&self.phone),
            address: sanitize_inline_text(&self.address),
        })
    }
}

/// Form payload emitted when editing an existing customer.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCustomerForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub last_name: String,
    #[validate(length(max = PHONE_MAX_LEN))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: String,
    pub status: String,
}

impl EditCustomerForm {
    pub fn into_update_customer(self) -> FormResult<EditPayload<UpdateCustomer>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateCustomer {
                user_id: self.user_id,
                first_name: required_text(&self.first_name, "first name")?,
                last_name: sanitize_inline_text(&self.last_name),
                phone: sanitize_inline_text(&self.phone),
                address: sanitize_inline_text(&self.address),
                status: parse_status(&self.status)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordStatus;
    use crate::forms::FormError;

    #[test]
    fn add_customer_form_sanitizes_and_converts() {
        let form = AddCustomerForm {
            user_id: 7,
            first_name: "  María   José ".into(),
            last_name: " Pérez ".into(),
            phone: " 555 0101 ".into(),
            address: "Calle  8 ".into(),
        };

        let customer = form.into_new_customer().expect("conversion");

        assert_eq!(customer.first_name, "María José");
        assert_eq!(customer.last_name, "Pérez");
        assert_eq!(customer.phone, "555 0101");
        assert_eq!(customer.address, "Calle 8");
    }

    #[test]
    fn add_customer_form_rejects_blank_name() {
        let form = AddCustomerForm {
            user_id: 7,
            first_name: "   ".into(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
        };

        assert!(matches!(
            form.into_new_customer(),
            Err(FormError::EmptyField("first name"))
        ));
    }

    #[test]
    fn add_customer_form_requires_user() {
        let form = AddCustomerForm {
            user_id: 0,
            first_name: "Ana".into(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
        };

        assert!(matches!(form.into_new_customer(), Err(FormError::Validation(_))));
    }

    #[test]
    fn edit_customer_form_parses_status() {
        let form = EditCustomerForm {
            id: 3,
            user_id: 7,
            first_name: "Ana".into(),
            last_name: "Torres".into(),
            phone: String::new(),
            address: String::new(),
            status: "inactivo".into(),
        };

        let payload = form.into_update_customer().expect("conversion");

        assert_eq!(payload.id, 3);
        assert_eq!(payload.update.status, RecordStatus::Inactive);
    }
}
