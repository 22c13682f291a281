use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// A product line of an order, tied to the payment that settled it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub payment_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for OrderDetail {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.product_id.to_string(),
            self.payment_id.to_string(),
            self.modified_by.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderDetail {
    pub order_id: i32,
    pub product_id: i32,
    pub payment_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrderDetail {
    pub order_id: i32,
    pub product_id: i32,
    pub payment_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateOrderDetail {
    pub fn apply_to(self, current: OrderDetail) -> OrderDetail {
        OrderDetail {
            id: current.id,
            order_id: self.order_id,
            product_id: self.product_id,
            payment_id: self.payment_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
