use serde::Deserialize;
use validator::Validate;

use crate::domain::order_detail::{NewOrderDetail, UpdateOrderDetail};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, parse_amount, parse_status, required_text,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddOrderDetailForm {
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub payment_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddOrderDetailForm {
    pub fn into_new_order_detail(self) -> FormResult<NewOrderDetail> {
        self.validate()?;

        Ok(NewOrderDetail {
            order_id: self.order_id,
            product_id: self.product_id,
            payment_id: self.payment_id,
            quantity: self.quantity,
            unit_price: parse_amount(&self.unit_price, "unit price")?,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditOrderDetailForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub payment_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditOrderDetailForm {
    pub fn into_update_order_detail(self) -> FormResult<EditPayload<UpdateOrderDetail>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateOrderDetail {
                order_id: self.order_id,
                product_id: self.product_id,
                payment_id: self.payment_id,
                quantity: self.quantity,
                unit_price: parse_amount(&self.unit_price, "unit price")?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}
