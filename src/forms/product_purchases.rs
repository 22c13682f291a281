use serde::Deserialize;
use validator::Validate;

use crate::domain::product_purchase::{NewProductPurchase, UpdateProductPurchase};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, optional_text,
    parse_amount, parse_date, parse_status, sanitize_inline_text,
};

/// Form payload for registering a purchase from a supplier.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductPurchaseForm {
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub purchased_on: String,
    pub amount: String,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddProductPurchaseForm {
    pub fn into_new_product_purchase(self) -> FormResult<NewProductPurchase> {
        self.validate()?;

        Ok(NewProductPurchase {
            description: sanitize_inline_text(&self.description),
            purchased_on: parse_date(&self.purchased_on, "date")?,
            amount: parse_amount(&self.amount, "amount")?,
            product_id: self.product_id,
            supplier_id: self.supplier_id,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditProductPurchaseForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub purchased_on: String,
    pub amount: String,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditProductPurchaseForm {
    pub fn into_update_product_purchase(self) -> FormResult<EditPayload<UpdateProductPurchase>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateProductPurchase {
                description: sanitize_inline_text(&self.description),
                purchased_on: parse_date(&self.purchased_on, "date")?,
                amount: parse_amount(&self.amount, "amount")?,
                product_id: self.product_id,
                supplier_id: self.supplier_id,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
