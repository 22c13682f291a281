use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::OrderStage;
use crate::domain::order::{NewOrder, UpdateOrder};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, parse_amount, parse_stage, parse_status, required_text,
};

/// Form payload emitted when submitting the "Add order" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddOrderForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub total: String,
    /// Initial stage; defaults to processing when omitted.
    #[serde(default)]
    pub stage: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddOrderForm {
    pub fn into_new_order(self, now: NaiveDateTime) -> FormResult<NewOrder> {
        self.validate()?;

        let stage = match self.stage.as_deref().map(str::trim) {
            None | Some("") => OrderStage::default(),
            Some(raw) => parse_stage(raw)?,
        };

        Ok(NewOrder {
            customer_id: self.customer_id,
            placed_at: now,
            total: parse_amount(&self.total, "total")?,
            stage,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

/// Form payload emitted when editing an existing order.
#[derive(Debug, Deserialize, Validate)]
pub struct EditOrderForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub total: String,
    pub stage: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditOrderForm {
    pub fn into_update_order(self) -> FormResult<EditPayload<UpdateOrder>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateOrder {
                customer_id: self.customer_id,
                total: parse_amount(&self.total, "total")?,
                stage: parse_stage(&self.stage)?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}

/// Inline stage selector rendered on each order row.
#[derive(Debug, Deserialize)]
pub struct ChangeStageForm {
    pub stage: String,
}

impl ChangeStageForm {
    pub fn into_stage(self) -> FormResult<OrderStage> {
        parse_stage(&self.stage)
    }
}
