use serde::Deserialize;
use validator::Validate;

use crate::domain::promotion_product::{NewPromotionProduct, UpdatePromotionProduct};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, empty_string_as_none, optional_text, parse_status,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddPromotionProductForm {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub promotion_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddPromotionProductForm {
    pub fn into_new_promotion_product(self) -> FormResult<NewPromotionProduct> {
        self.validate()?;

        Ok(NewPromotionProduct {
            product_id: self.product_id,
            promotion_id: self.promotion_id,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditPromotionProductForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub promotion_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditPromotionProductForm {
    pub fn into_update_promotion_product(
        self,
    ) -> FormResult<EditPayload<UpdatePromotionProduct>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdatePromotionProduct {
                product_id: self.product_id,
                promotion_id: self.promotion_id,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
