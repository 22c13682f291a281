use serde::Deserialize;
use validator::Validate;

use rust_decimal::Decimal;

use crate::domain::cart_detail::{NewCartDetail, UpdateCartDetail, checked_line_total};
use crate::forms::{
    EditPayload, FormError, FormResult, NAME_MAX_LEN, parse_amount, parse_status, required_text,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddCartDetailForm {
    #[validate(range(min = 1))]
    pub cart_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddCartDetailForm {
    /// Converts the payload, computing the line total.
    pub fn into_new_cart_detail(self) -> FormResult<NewCartDetail> {
        self.validate()?;

        Ok(NewCartDetail::new(
            self.cart_id,
            self.product_id,
            self.quantity,
            parse_unit_price(&self.unit_price, self.quantity)?,
            required_text(&self.modified_by, "modified by")?,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditCartDetailForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub cart_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditCartDetailForm {
    pub fn into_update_cart_detail(self) -> FormResult<EditPayload<UpdateCartDetail>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateCartDetail {
                cart_id: self.cart_id,
                product_id: self.product_id,
                quantity: self.quantity,
                unit_price: parse_unit_price(&self.unit_price, self.quantity)?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}

/// Unit price whose line total for `quantity` is representable.
fn parse_unit_price(value: &str, quantity: i32) -> FormResult<Decimal> {
    let unit_price = parse_amount(value, "unit price")?;
    if checked_line_total(quantity, unit_price).is_none() {
        return Err(FormError::InvalidAmount {
            field: "unit price",
            value: value.trim().to_string(),
        });
    }
    Ok(unit_price)
}
