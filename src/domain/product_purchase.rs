use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Stock purchased from a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPurchase {
    pub id: i32,
    pub description: String,
    pub purchased_on: NaiveDate,
    pub amount: Decimal,
    pub product_id: i32,
    pub supplier_id: i32,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for ProductPurchase {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.product_id.to_string(),
            self.supplier_id.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductPurchase {
    pub description: String,
    pub purchased_on: NaiveDate,
    pub amount: Decimal,
    pub product_id: i32,
    pub supplier_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductPurchase {
    pub description: String,
    pub purchased_on: NaiveDate,
    pub amount: Decimal,
    pub product_id: i32,
    pub supplier_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateProductPurchase {
    pub fn apply_to(self, current: ProductPurchase) -> ProductPurchase {
        ProductPurchase {
            id: current.id,
            description: self.description,
            purchased_on: self.purchased_on,
            amount: self.amount,
            product_id: self.product_id,
            supplier_id: self.supplier_id,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
