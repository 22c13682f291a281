use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Link between a promotion and a product it applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromotionProduct {
    pub id: i32,
    pub product_id: i32,
    pub promotion_id: i32,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for PromotionProduct {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.product_id.to_string(), self.promotion_id.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromotionProduct {
    pub product_id: i32,
    pub promotion_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePromotionProduct {
    pub product_id: i32,
    pub promotion_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdatePromotionProduct {
    pub fn apply_to(self, current: PromotionProduct) -> PromotionProduct {
        PromotionProduct {
            id: current.id,
            product_id: self.product_id,
            promotion_id: self.promotion_id,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
