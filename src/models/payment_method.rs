use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::payment_method::{
    NewPaymentMethod as DomainNewPaymentMethod, PaymentMethod as DomainPaymentMethod,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id_pago: i32,
    pub id_cliente: i32,
    pub tipo_pago: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre_titular: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub numero_tarjeta: String,
    #[serde(with = "timestamp::date")]
    pub fecha_vencimiento: NaiveDate,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cvv: String,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<PaymentMethod> for DomainPaymentMethod {
    fn from(value: PaymentMethod) -> Self {
        Self {
            id: value.id_pago,
            customer_id: value.id_cliente,
            kind: value.tipo_pago,
            holder_name: value.nombre_titular,
            card_number: value.numero_tarjeta,
            expires_on: value.fecha_vencimiento,
            cvv: value.cvv,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainPaymentMethod> for PaymentMethod {
    fn from(value: &DomainPaymentMethod) -> Self {
        Self {
            id_pago: value.id,
            id_cliente: value.customer_id,
            tipo_pago: value.kind.clone(),
            nombre_titular: value.holder_name.clone(),
            numero_tarjeta: value.card_number.clone(),
            fecha_vencimiento: value.expires_on,
            cvv: value.cvv.clone(),
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewPaymentMethod> for PaymentMethod {
    fn from(value: &DomainNewPaymentMethod) -> Self {
        Self {
            id_pago: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            tipo_pago: value.kind.clone(),
            nombre_titular: value.holder_name.clone(),
            numero_tarjeta: value.card_number.clone(),
            fecha_vencimiento: value.expires_on,
            cvv: value.cvv.clone(),
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}
