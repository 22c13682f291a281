use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// A discount campaign. Only displayed; discounts are applied elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Promotion {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Percentage between 0 and 100.
    pub discount_percent: Decimal,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for Promotion {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromotion {
    pub name: String,
    pub description: String,
    pub discount_percent: Decimal,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePromotion {
    pub name: String,
    pub description: String,
    pub discount_percent: Decimal,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdatePromotion {
    pub fn apply_to(self, current: Promotion) -> Promotion {
        Promotion {
            id: current.id,
            name: self.name,
            description: self.description,
            discount_percent: self.discount_percent,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
