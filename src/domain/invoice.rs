use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Invoice header kept by the catalog backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    /// Unique identifier of the invoice.
    pub id: i32,
    /// Customer name as printed on the invoice.
    pub customer: String,
    /// Invoice date.
    pub issued_on: NaiveDate,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for Invoice {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.customer.clone(), self.issued_on.to_string()]
    }
}

/// Payload required to issue an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub customer: String,
    pub issued_on: NaiveDate,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInvoice {
    pub customer: String,
    pub issued_on: NaiveDate,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateInvoice {
    pub fn apply_to(self, current: Invoice) -> Invoice {
        Invoice {
            id: current.id,
            customer: self.customer,
            issued_on: self.issued_on,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
