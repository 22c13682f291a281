use serde::Deserialize;
use validator::Validate;

use crate::domain::invoice::{NewInvoice, UpdateInvoice};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, empty_string_as_none, optional_text, parse_date,
    parse_status, required_text,
};

/// Form payload emitted when submitting the "Add invoice" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddInvoiceForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub customer: String,
    pub issued_on: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddInvoiceForm {
    pub fn into_new_invoice(self) -> FormResult<NewInvoice> {
        self.validate()?;

        Ok(NewInvoice {
            customer: required_text(&self.customer, "customer")?,
            issued_on: parse_date(&self.issued_on, "date")?,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditInvoiceForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub customer: String,
    pub issued_on: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditInvoiceForm {
    pub fn into_update_invoice(self) -> FormResult<EditPayload<UpdateInvoice>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateInvoice {
                customer: required_text(&self.customer, "customer")?,
                issued_on: parse_date(&self.issued_on, "date")?,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
