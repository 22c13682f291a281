use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::purchase_record::{NewPurchaseRecord, UpdatePurchaseRecord};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, parse_amount, parse_status, required_text,
};

/// Form payload for recording a purchase in the order history.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPurchaseRecordForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 1))]
    pub order_id: i32,
    pub total: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddPurchaseRecordForm {
    pub fn into_new_purchase_record(self, now: NaiveDateTime) -> FormResult<NewPurchaseRecord> {
        self.validate()?;

        Ok(NewPurchaseRecord {
            customer_id: self.customer_id,
            order_id: self.order_id,
            purchased_at: now,
            total: parse_amount(&self.total, "total")?,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditPurchaseRecordForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 1))]
    pub order_id: i32,
    pub total: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditPurchaseRecordForm {
    pub fn into_update_purchase_record(self) -> FormResult<EditPayload<UpdatePurchaseRecord>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdatePurchaseRecord {
                customer_id: self.customer_id,
                order_id: self.order_id,
                total: parse_amount(&self.total, "total")?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}
