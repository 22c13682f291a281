use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Domain representation of a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable product name.
    pub name: String,
    /// Longer description shown in the catalog.
    pub description: String,
    /// List price.
    pub price: Decimal,
    /// Category the product is filed under.
    pub category_id: i32,
    /// Surface category (see [`crate::domain::surface_category`]).
    pub surface_category_id: i32,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for Product {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

/// Payload required to add a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub surface_category_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub surface_category_id: i32,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateProduct {
    pub fn apply_to(self, current: Product) -> Product {
        Product {
            id: current.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
            surface_category_id: self.surface_category_id,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
