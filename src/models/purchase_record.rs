use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::purchase_record::{
    NewPurchaseRecord as DomainNewPurchaseRecord, PurchaseRecord as DomainPurchaseRecord,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

/// Row of the order history collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id_historial: i32,
    pub id_cliente: i32,
    pub id_pedido: i32,
    #[serde(with = "timestamp::datetime")]
    pub fecha_compra: NaiveDateTime,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_compra: Decimal,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<PurchaseRecord> for DomainPurchaseRecord {
    fn from(value: PurchaseRecord) -> Self {
        Self {
            id: value.id_historial,
            customer_id: value.id_cliente,
            order_id: value.id_pedido,
            purchased_at: value.fecha_compra,
            total: value.total_compra,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainPurchaseRecord> for PurchaseRecord {
    fn from(value: &DomainPurchaseRecord) -> Self {
        Self {
            id_historial: value.id,
            id_cliente: value.customer_id,
            id_pedido: value.order_id,
            fecha_compra: value.purchased_at,
            total_compra: value.total,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewPurchaseRecord> for PurchaseRecord {
    fn from(value: &DomainNewPurchaseRecord) -> Self {
        Self {
            id_historial: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            id_pedido: value.order_id,
            fecha_compra: value.purchased_at,
            total_compra: value.total,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_order_history_row() {
        let json = r#"{"id_historial":9,"id_cliente":4,"id_pedido":7,
            "fecha_compra":"2024-02-10T08:15:00Z","total_compra":"89.50","status":"activo",
            "empleado_mod":"eva"}"#;

        let record: DomainPurchaseRecord =
            serde_json::from_str::<PurchaseRecord>(json).expect("decode").into();

        assert_eq!(record.order_id, 7);
        assert_eq!(record.total, Decimal::new(8950, 2));

        let body = serde_json::to_value(PurchaseRecord::from(&record)).expect("encode");

        assert_eq!(body["id_historial"], 9);
        assert_eq!(body["total_compra"], 89.5);
        assert_eq!(body["fecha_compra"], "2024-02-10T08:15:00");
    }
}
