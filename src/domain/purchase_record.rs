use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Entry of a customer's purchase history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub id: i32,
    pub customer_id: i32,
    pub order_id: i32,
    pub purchased_at: NaiveDateTime,
    pub total: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for PurchaseRecord {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.order_id.to_string(),
            self.modified_by.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchaseRecord {
    pub customer_id: i32,
    pub order_id: i32,
    pub purchased_at: NaiveDateTime,
    pub total: Decimal,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePurchaseRecord {
    pub customer_id: i32,
    pub order_id: i32,
    pub total: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdatePurchaseRecord {
    /// Produce the full record, keeping the purchase time.
    pub fn apply_to(self, current: PurchaseRecord) -> PurchaseRecord {
        PurchaseRecord {
            id: current.id,
            customer_id: self.customer_id,
            order_id: self.order_id,
            purchased_at: current.purchased_at,
            total: self.total,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
