use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::cart_detail::{
    CartDetail as DomainCartDetail, NewCartDetail as DomainNewCartDetail,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDetail {
    pub id_detalle_carrito: i32,
    pub id_carrito: i32,
    pub id_producto: i32,
    pub cantidad: i32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub precio_unitario: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<CartDetail> for DomainCartDetail {
    fn from(value: CartDetail) -> Self {
        Self {
            id: value.id_detalle_carrito,
            cart_id: value.id_carrito,
            product_id: value.id_producto,
            quantity: value.cantidad,
            unit_price: value.precio_unitario,
            total: value.total,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainCartDetail> for CartDetail {
    fn from(value: &DomainCartDetail) -> Self {
        Self {
            id_detalle_carrito: value.id,
            id_carrito: value.cart_id,
            id_producto: value.product_id,
            cantidad: value.quantity,
            precio_unitario: value.unit_price,
            total: value.total,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewCartDetail> for CartDetail {
    fn from(value: &DomainNewCartDetail) -> Self {
        Self {
            id_detalle_carrito: PLACEHOLDER_ID,
            id_carrito: value.cart_id,
            id_producto: value.product_id,
            cantidad: value.quantity,
            precio_unitario: value.unit_price,
            total: value.total,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}
