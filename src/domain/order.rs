use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{OrderStage, RecordStatus, Searchable};

/// Domain representation of a customer order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer placing the order.
    pub customer_id: i32,
    /// Timestamp when the order was placed.
    pub placed_at: NaiveDateTime,
    /// Order total.
    pub total: Decimal,
    /// Current fulfilment stage.
    pub stage: OrderStage,
    /// Whether the order is active.
    pub status: RecordStatus,
    /// Employee that last modified the record.
    pub modified_by: String,
}

impl Searchable for Order {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.stage.to_string(),
            self.modified_by.clone(),
        ]
    }
}

/// Payload required to place a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub placed_at: NaiveDateTime,
    pub total: Decimal,
    pub stage: OrderStage,
    pub modified_by: String,
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrder {
    pub customer_id: i32,
    pub total: Decimal,
    pub stage: OrderStage,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateOrder {
    /// Produce the full record sent to the backend, keeping the placement time.
    pub fn apply_to(self, current: Order) -> Order {
        Order {
            id: current.id,
            customer_id: self.customer_id,
            placed_at: current.placed_at,
            total: self.total,
            stage: self.stage,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
