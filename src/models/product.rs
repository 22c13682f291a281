use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::models::{CatalogAudit, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub producto_id: i32,
    pub nombre: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub descripcion: String,
    pub precio: Decimal,
    pub categoria_id: i32,
    pub categoria_superficie_producto_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductBody {
    pub nombre: String,
    pub descripcion: String,
    pub precio: Decimal,
    pub categoria_id: i32,
    pub categoria_superficie_producto_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.producto_id,
            name: value.nombre,
            description: value.descripcion,
            price: value.precio,
            category_id: value.categoria_id,
            surface_category_id: value.categoria_superficie_producto_id,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewProduct> for ProductBody {
    fn from(value: &DomainNewProduct) -> Self {
        Self {
            nombre: value.name.clone(),
            descripcion: value.description.clone(),
            precio: value.price,
            categoria_id: value.category_id,
            categoria_superficie_producto_id: value.surface_category_id,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainProduct> for ProductBody {
    fn from(value: &DomainProduct) -> Self {
        Self {
            nombre: value.name.clone(),
            descripcion: value.description.clone(),
            precio: value.price,
            categoria_id: value.category_id,
            categoria_superficie_producto_id: value.surface_category_id,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}
