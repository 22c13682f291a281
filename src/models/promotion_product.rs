use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::promotion_product::{
    NewPromotionProduct as DomainNewPromotionProduct, PromotionProduct as DomainPromotionProduct,
};
use crate::models::{CatalogAudit, status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromotionProduct {
    pub promocion_producto_id: i32,
    pub producto_id: i32,
    pub promocion_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionProductBody {
    pub producto_id: i32,
    pub promocion_id: i32,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<PromotionProduct> for DomainPromotionProduct {
    fn from(value: PromotionProduct) -> Self {
        Self {
            id: value.promocion_producto_id,
            product_id: value.producto_id,
            promotion_id: value.promocion_id,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewPromotionProduct> for PromotionProductBody {
    fn from(value: &DomainNewPromotionProduct) -> Self {
        Self {
            producto_id: value.product_id,
            promocion_id: value.promotion_id,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainPromotionProduct> for PromotionProductBody {
    fn from(value: &DomainPromotionProduct) -> Self {
        Self {
            producto_id: value.product_id,
            promocion_id: value.promotion_id,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}
