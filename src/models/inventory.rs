use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
};
use crate::models::{CatalogAudit, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub inventario_id: i32,
    pub producto_id: i32,
    pub cantidad: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItemBody {
    pub producto_id: i32,
    pub cantidad: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.inventario_id,
            product_id: value.producto_id,
            quantity: value.cantidad,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewInventoryItem> for InventoryItemBody {
    fn from(value: &DomainNewInventoryItem) -> Self {
        Self {
            producto_id: value.product_id,
            cantidad: value.quantity,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainInventoryItem> for InventoryItemBody {
    fn from(value: &DomainInventoryItem) -> Self {
        Self {
            producto_id: value.product_id,
            cantidad: value.quantity,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_inventory_row() {
        let json = r#"{"inventario_id":12,"producto_id":8,"cantidad":40,"status":"I",
            "fecha_creac":"2024-01-20T09:00:00.000Z","fecha_mod":null,"usuario_mod":null}"#;

        let item: DomainInventoryItem =
            serde_json::from_str::<InventoryItem>(json).expect("decode").into();

        assert_eq!(item.id, 12);
        assert_eq!(item.quantity, 40);
        assert_eq!(item.status, RecordStatus::Inactive);
        assert!(item.audit.created_at.is_some());
        assert!(item.audit.modified_by.is_none());

        let body = serde_json::to_value(InventoryItemBody::from(&item)).expect("encode");

        assert_eq!(
            body,
            serde_json::json!({
                "producto_id": 8,
                "cantidad": 40,
                "status": "I",
                "usuario_mod": null
            })
        );
    }
}
