use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Domain representation of a shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    /// Unique identifier of the cart.
    pub id: i32,
    /// Customer owning the cart. Not checked against the customer list.
    pub customer_id: i32,
    /// Timestamp when the cart was opened.
    pub created_at: NaiveDateTime,
    /// Cart total as reported by the backend.
    pub total: Decimal,
    /// Free-form workflow state (for example "abierto").
    pub state: String,
    /// Whether the cart is active.
    pub status: RecordStatus,
    /// Employee that last modified the record.
    pub modified_by: String,
}

impl Searchable for Cart {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.state.clone(),
            self.modified_by.clone(),
        ]
    }
}

/// Payload required to open a new cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub customer_id: i32,
    pub created_at: NaiveDateTime,
    pub total: Decimal,
    pub state: String,
    pub modified_by: String,
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCart {
    pub customer_id: i32,
    pub total: Decimal,
    pub state: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateCart {
    /// Produce the full record sent to the backend, keeping the creation time.
    pub fn apply_to(self, current: Cart) -> Cart {
        Cart {
            id: current.id,
            customer_id: self.customer_id,
            created_at: current.created_at,
            total: self.total,
            state: self.state,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
