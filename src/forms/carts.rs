use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::cart::{NewCart, UpdateCart};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, parse_amount, parse_status, required_text,
};

/// Form payload emitted when submitting the "Add cart" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub total: String,
    /// Workflow state typed by the operator, e.g. "abierto".
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub state: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddCartForm {
    /// Converts the payload into a `NewCart` opened at `now`.
    pub fn into_new_cart(self, now: NaiveDateTime) -> FormResult<NewCart> {
        self.validate()?;

        Ok(NewCart {
            customer_id: self.customer_id,
            created_at: now,
            total: parse_amount(&self.total, "total")?,
            state: required_text(&self.state, "state")?,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditCartForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub total: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub state: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditCartForm {
    pub fn into_update_cart(self) -> FormResult<EditPayload<UpdateCart>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateCart {
                customer_id: self.customer_id,
                total: parse_amount(&self.total, "total")?,
                state: required_text(&self.state, "state")?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}
