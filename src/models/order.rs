use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::domain::{OrderStage, RecordStatus};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id_pedido: i32,
    pub id_cliente: i32,
    #[serde(with = "timestamp::datetime")]
    pub fecha_pedido: NaiveDateTime,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_pedido: Decimal,
    #[serde(with = "status::stage")]
    pub estado_pedido: OrderStage,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id_pedido,
            customer_id: value.id_cliente,
            placed_at: value.fecha_pedido,
            total: value.total_pedido,
            stage: value.estado_pedido,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainOrder> for Order {
    fn from(value: &DomainOrder) -> Self {
        Self {
            id_pedido: value.id,
            id_cliente: value.customer_id,
            fecha_pedido: value.placed_at,
            total_pedido: value.total,
            estado_pedido: value.stage,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewOrder> for Order {
    fn from(value: &DomainNewOrder) -> Self {
        Self {
            id_pedido: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            fecha_pedido: value.placed_at,
            total_pedido: value.total,
            estado_pedido: value.stage,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spanish_stage() {
        let json = r#"{"id_pedido":7,"id_cliente":2,"fecha_pedido":"2024-02-10T08:15:00Z",
            "total_pedido":120,"estado_pedido":"entregado",
            "status":"activo","empleado_mod":"eva"}"#;

        let order: DomainOrder = serde_json::from_str::<Order>(json).expect("decode").into();

        assert_eq!(order.stage, OrderStage::Delivered);
        assert_eq!(order.total, Decimal::from(120));
    }
}
