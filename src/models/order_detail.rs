use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::order_detail::{
    NewOrderDetail as DomainNewOrderDetail, OrderDetail as DomainOrderDetail,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id_detalle_pedido: i32,
    pub id_pedido: i32,
    pub id_producto: i32,
    pub id_pago: i32,
    pub cantidad: i32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub precio_unitario: Decimal,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<OrderDetail> for DomainOrderDetail {
    fn from(value: OrderDetail) -> Self {
        Self {
            id: value.id_detalle_pedido,
            order_id: value.id_pedido,
            product_id: value.id_producto,
            payment_id: value.id_pago,
            quantity: value.cantidad,
            unit_price: value.precio_unitario,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainOrderDetail> for OrderDetail {
    fn from(value: &DomainOrderDetail) -> Self {
        Self {
            id_detalle_pedido: value.id,
            id_pedido: value.order_id,
            id_producto: value.product_id,
            id_pago: value.payment_id,
            cantidad: value.quantity,
            precio_unitario: value.unit_price,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewOrderDetail> for OrderDetail {
    fn from(value: &DomainNewOrderDetail) -> Self {
        Self {
            id_detalle_pedido: PLACEHOLDER_ID,
            id_pedido: value.order_id,
            id_producto: value.product_id,
            id_pago: value.payment_id,
            cantidad: value.quantity,
            precio_unitario: value.unit_price,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}
