use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::product_purchase::{
    NewProductPurchase as DomainNewProductPurchase, ProductPurchase as DomainProductPurchase,
};
use crate::models::{CatalogAudit, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPurchase {
    pub compra_producto_id: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descripcion: String,
    #[serde(with = "timestamp::date")]
    pub fecha: NaiveDate,
    pub monto: Decimal,
    pub producto_id: i32,
    pub proveedor_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPurchaseBody {
    pub descripcion: String,
    #[serde(with = "timestamp::date")]
    pub fecha: NaiveDate,
    pub monto: Decimal,
    pub producto_id: i32,
    pub proveedor_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<ProductPurchase> for DomainProductPurchase {
    fn from(value: ProductPurchase) -> Self {
        Self {
            id: value.compra_producto_id,
            description: value.descripcion,
            purchased_on: value.fecha,
            amount: value.monto,
            product_id: value.producto_id,
            supplier_id: value.proveedor_id,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewProductPurchase> for ProductPurchaseBody {
    fn from(value: &DomainNewProductPurchase) -> Self {
        Self {
            descripcion: value.description.clone(),
            fecha: value.purchased_on,
            monto: value.amount,
            producto_id: value.product_id,
            proveedor_id: value.supplier_id,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainProductPurchase> for ProductPurchaseBody {
    fn from(value: &DomainProductPurchase) -> Self {
        Self {
            descripcion: value.description.clone(),
            fecha: value.purchased_on,
            monto: value.amount,
            producto_id: value.product_id,
            proveedor_id: value.supplier_id,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}
