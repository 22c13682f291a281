use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::invoice_detail::{
    InvoiceDetail as DomainInvoiceDetail, NewInvoiceDetail as DomainNewInvoiceDetail,
};
use crate::models::{CatalogAudit, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceDetail {
    pub factura_detalle_id: i32,
    pub factura_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
    pub subtotal: Decimal,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetailBody {
    pub factura_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
    pub subtotal: Decimal,
    pub total: Option<Decimal>,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<InvoiceDetail> for DomainInvoiceDetail {
    fn from(value: InvoiceDetail) -> Self {
        Self {
            id: value.factura_detalle_id,
            invoice_id: value.factura_id,
            product_id: value.producto_id,
            quantity: value.cantidad,
            subtotal: value.subtotal,
            total: value.total,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewInvoiceDetail> for InvoiceDetailBody {
    fn from(value: &DomainNewInvoiceDetail) -> Self {
        Self {
            factura_id: value.invoice_id,
            producto_id: value.product_id,
            cantidad: value.quantity,
            subtotal: value.subtotal,
            total: value.total,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainInvoiceDetail> for InvoiceDetailBody {
    fn from(value: &DomainInvoiceDetail) -> Self {
        Self {
            factura_id: value.invoice_id,
            producto_id: value.product_id,
            cantidad: value.quantity,
            subtotal: value.subtotal,
            total: value.total,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_travels_as_strings() {
        let json = r#"{"factura_detalle_id":1,"factura_id":10,"producto_id":3,"cantidad":2,
            "subtotal":"40.00","total":null,"status":"A","fecha_creac":"2024-06-01 12:00:00"}"#;

        let detail: DomainInvoiceDetail =
            serde_json::from_str::<InvoiceDetail>(json).expect("decode").into();
        let body = serde_json::to_value(InvoiceDetailBody::from(&detail)).expect("encode");

        assert_eq!(detail.subtotal, Decimal::new(4000, 2));
        assert_eq!(detail.total, None);
        assert_eq!(body["subtotal"], "40.00");
        assert!(body["total"].is_null());
    }
}
