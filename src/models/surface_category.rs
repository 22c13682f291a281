use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::surface_category::{
    NewSurfaceCategory as DomainNewSurfaceCategory, SurfaceCategory as DomainSurfaceCategory,
};
use crate::models::{CatalogAudit, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurfaceCategory {
    pub categoria_superficie_producto_id: i32,
    pub superficie_nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub superficie_descripcion: String,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceCategoryBody {
    pub superficie_nombre: String,
    pub superficie_descripcion: String,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<SurfaceCategory> for DomainSurfaceCategory {
    fn from(value: SurfaceCategory) -> Self {
        Self {
            id: value.categoria_superficie_producto_id,
            name: value.superficie_nombre,
            description: value.superficie_descripcion,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewSurfaceCategory> for SurfaceCategoryBody {
    fn from(value: &DomainNewSurfaceCategory) -> Self {
        Self {
            superficie_nombre: value.name.clone(),
            superficie_descripcion: value.description.clone(),
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainSurfaceCategory> for SurfaceCategoryBody {
    fn from(value: &DomainSurfaceCategory) -> Self {
        Self {
            superficie_nombre: value.name.clone(),
            superficie_descripcion: value.description.clone(),
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_surface_category() {
        let json = r#"{"categoria_superficie_producto_id":4,"superficie_nombre":"Piso",
            "superficie_descripcion":null,"status":"I","fecha_creac":null,
            "fecha_mod":"2024-02-01T09:00:00.000Z","usuario_mod":"eva"}"#;

        let category: DomainSurfaceCategory =
            serde_json::from_str::<SurfaceCategory>(json).expect("decode").into();

        assert_eq!(category.id, 4);
        assert_eq!(category.name, "Piso");
        assert_eq!(category.description, "");
        assert!(category.audit.modified_at.is_some());

        let body = serde_json::to_value(SurfaceCategoryBody::from(&category)).expect("encode");

        assert_eq!(
            body,
            serde_json::json!({
                "superficie_nombre": "Piso",
                "superficie_descripcion": "",
                "status": "I",
                "usuario_mod": "eva"
            })
        );
    }
}
