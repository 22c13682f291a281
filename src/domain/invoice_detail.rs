use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Line item of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceDetail {
    pub id: i32,
    pub invoice_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal: Decimal,
    /// Absent on lines the backend has not totalled yet.
    pub total: Option<Decimal>,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for InvoiceDetail {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.invoice_id.to_string(), self.product_id.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoiceDetail {
    pub invoice_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal: Decimal,
    pub total: Option<Decimal>,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInvoiceDetail {
    pub invoice_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal: Decimal,
    pub total: Option<Decimal>,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateInvoiceDetail {
    pub fn apply_to(self, current: InvoiceDetail) -> InvoiceDetail {
        InvoiceDetail {
            id: current.id,
            invoice_id: self.invoice_id,
            product_id: self.product_id,
            quantity: self.quantity,
            subtotal: self.subtotal,
            total: self.total,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
