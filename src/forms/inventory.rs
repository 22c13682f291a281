use serde::Deserialize;
use validator::Validate;

use crate::domain::inventory::{NewInventoryItem, UpdateInventoryItem};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, empty_string_as_none, optional_text, parse_status,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddInventoryItemForm {
    #[validate(range(min = 1))]
    pub product_id: i32,
    /// Units on hand; zero is allowed for depleted stock.
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddInventoryItemForm {
    pub fn into_new_inventory_item(self) -> FormResult<NewInventoryItem> {
        self.validate()?;

        Ok(NewInventoryItem {
            product_id: self.product_id,
            quantity: self.quantity,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditInventoryItemForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditInventoryItemForm {
    pub fn into_update_inventory_item(self) -> FormResult<EditPayload<UpdateInventoryItem>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateInventoryItem {
                product_id: self.product_id,
                quantity: self.quantity,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
