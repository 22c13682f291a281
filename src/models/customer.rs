use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id_cliente: i32,
    pub id_usuario: i32,
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apellidos: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefono: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direccion: String,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id_cliente,
            user_id: value.id_usuario,
            first_name: value.nombre,
            last_name: value.apellidos,
            phone: value.telefono,
            address: value.direccion,
            status: value.status,
        }
    }
}

impl From<&DomainCustomer> for Customer {
    fn from(value: &DomainCustomer) -> Self {
        Self {
            id_cliente: value.id,
            id_usuario: value.user_id,
            nombre: value.first_name.clone(),
            apellidos: value.last_name.clone(),
            telefono: value.phone.clone(),
            direccion: value.address.clone(),
            status: value.status,
        }
    }
}

impl From<&DomainNewCustomer> for Customer {
    fn from(value: &DomainNewCustomer) -> Self {
        Self {
            id_cliente: PLACEHOLDER_ID,
            id_usuario: value.user_id,
            nombre: value.first_name.clone(),
            apellidos: value.last_name.clone(),
            telefono: value.phone.clone(),
            direccion: value.address.clone(),
            status: RecordStatus::Active,
        }
    }
}
