use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::invoice::{Invoice as DomainInvoice, NewInvoice as DomainNewInvoice};
use crate::models::{CatalogAudit, status, timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invoice {
    pub factura_id: i32,
    pub cliente: String,
    #[serde(with = "timestamp::date")]
    pub fecha: NaiveDate,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

/// Create and update body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceBody {
    pub cliente: String,
    #[serde(with = "timestamp::date")]
    pub fecha: NaiveDate,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<Invoice> for DomainInvoice {
    fn from(value: Invoice) -> Self {
        Self {
            id: value.factura_id,
            customer: value.cliente,
            issued_on: value.fecha,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewInvoice> for InvoiceBody {
    fn from(value: &DomainNewInvoice) -> Self {
        Self {
            cliente: value.customer.clone(),
            fecha: value.issued_on,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainInvoice> for InvoiceBody {
    fn from(value: &DomainInvoice) -> Self {
        Self {
            cliente: value.customer.clone(),
            fecha: value.issued_on,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}
