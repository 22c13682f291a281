use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Stock level of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for InventoryItem {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.product_id.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryItem {
    pub product_id: i32,
    pub quantity: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInventoryItem {
    pub product_id: i32,
    pub quantity: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateInventoryItem {
    pub fn apply_to(self, current: InventoryItem) -> InventoryItem {
        InventoryItem {
            id: current.id,
            product_id: self.product_id,
            quantity: self.quantity,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
