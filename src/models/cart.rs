use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::cart::{Cart as DomainCart, NewCart as DomainNewCart};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id_carrito: i32,
    pub id_cliente: i32,
    #[serde(with = "timestamp::datetime")]
    pub fecha_creacion: NaiveDateTime,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub estado: String,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<Cart> for DomainCart {
    fn from(value: Cart) -> Self {
        Self {
            id: value.id_carrito,
            customer_id: value.id_cliente,
            created_at: value.fecha_creacion,
            total: value.total,
            state: value.estado,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainCart> for Cart {
    fn from(value: &DomainCart) -> Self {
        Self {
            id_carrito: value.id,
            id_cliente: value.customer_id,
            fecha_creacion: value.created_at,
            total: value.total,
            estado: value.state.clone(),
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewCart> for Cart {
    fn from(value: &DomainNewCart) -> Self {
        Self {
            id_carrito: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            fecha_creacion: value.created_at,
            total: value.total,
            estado: value.state.clone(),
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}
