use serde::Deserialize;
use validator::Validate;

use crate::domain::invoice_detail::{NewInvoiceDetail, UpdateInvoiceDetail};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, empty_string_as_none, optional_text, parse_amount,
    parse_status,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddInvoiceDetailForm {
    #[validate(range(min = 1))]
    pub invoice_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub subtotal: String,
    /// Left blank when the backend computes it.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<String>,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddInvoiceDetailForm {
    pub fn into_new_invoice_detail(self) -> FormResult<NewInvoiceDetail> {
        self.validate()?;

        Ok(NewInvoiceDetail {
            invoice_id: self.invoice_id,
            product_id: self.product_id,
            quantity: self.quantity,
            subtotal: parse_amount(&self.subtotal, "subtotal")?,
            total: self
                .total
                .as_deref()
                .map(|total| parse_amount(total, "total"))
                .transpose()?,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditInvoiceDetailForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub invoice_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub subtotal: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<String>,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditInvoiceDetailForm {
    pub fn into_update_invoice_detail(self) -> FormResult<EditPayload<UpdateInvoiceDetail>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateInvoiceDetail {
                invoice_id: self.invoice_id,
                product_id: self.product_id,
                quantity: self.quantity,
                subtotal: parse_amount(&self.subtotal, "subtotal")?,
                total: self
                    .total
                    .as_deref()
                    .map(|total| parse_amount(total, "total"))
                    .transpose()?,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
