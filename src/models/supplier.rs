use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::supplier::{NewSupplier as DomainNewSupplier, Supplier as DomainSupplier};
use crate::models::{CatalogAudit, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Supplier {
    pub proveedor_id: i32,
    pub nombre_proveedor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre_contacto: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub correo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefono: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direccion: String,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierBody {
    pub nombre_proveedor: String,
    pub nombre_contacto: String,
    pub correo: String,
    pub telefono: String,
    pub direccion: String,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<Supplier> for DomainSupplier {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.proveedor_id,
            name: value.nombre_proveedor,
            contact_name: value.nombre_contacto,
            email: value.correo,
            phone: value.telefono,
            address: value.direccion,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewSupplier> for SupplierBody {
    fn from(value: &DomainNewSupplier) -> Self {
        Self {
            nombre_proveedor: value.name.clone(),
            nombre_contacto: value.contact_name.clone(),
            correo: value.email.clone(),
            telefono: value.phone.clone(),
            direccion: value.address.clone(),
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainSupplier> for SupplierBody {
    fn from(value: &DomainSupplier) -> Self {
        Self {
            nombre_proveedor: value.name.clone(),
            nombre_contacto: value.contact_name.clone(),
            correo: value.email.clone(),
            telefono: value.phone.clone(),
            direccion: value.address.clone(),
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}
