use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::promotion::{NewPromotion as DomainNewPromotion, Promotion as DomainPromotion};
use crate::models::{CatalogAudit, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Promotion {
    pub promocion_id: i32,
    pub nombre_promocion: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descripcion: String,
    pub porcentaje_descuento: Decimal,
    #[serde(with = "timestamp::date")]
    pub fecha_inicio: NaiveDate,
    #[serde(with = "timestamp::date")]
    pub fecha_fin: NaiveDate,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub audit: CatalogAudit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionBody {
    pub nombre_promocion: String,
    pub descripcion: String,
    pub porcentaje_descuento: Decimal,
    #[serde(with = "timestamp::date")]
    pub fecha_inicio: NaiveDate,
    #[serde(with = "timestamp::date")]
    pub fecha_fin: NaiveDate,
    #[serde(with = "status::catalog")]
    pub status: RecordStatus,
    pub usuario_mod: Option<String>,
}

impl From<Promotion> for DomainPromotion {
    fn from(value: Promotion) -> Self {
        Self {
            id: value.promocion_id,
            name: value.nombre_promocion,
            description: value.descripcion,
            discount_percent: value.porcentaje_descuento,
            starts_on: value.fecha_inicio,
            ends_on: value.fecha_fin,
            status: value.status,
            audit: value.audit.into(),
        }
    }
}

impl From<&DomainNewPromotion> for PromotionBody {
    fn from(value: &DomainNewPromotion) -> Self {
        Self {
            nombre_promocion: value.name.clone(),
            descripcion: value.description.clone(),
            porcentaje_descuento: value.discount_percent,
            fecha_inicio: value.starts_on,
            fecha_fin: value.ends_on,
            status: value.status,
            usuario_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainPromotion> for PromotionBody {
    fn from(value: &DomainPromotion) -> Self {
        Self {
            nombre_promocion: value.name.clone(),
            descripcion: value.description.clone(),
            porcentaje_descuento: value.discount_percent,
            fecha_inicio: value.starts_on,
            fecha_fin: value.ends_on,
            status: value.status,
            usuario_mod: value.audit.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_promotion() {
        let json = r#"{"promocion_id":5,"nombre_promocion":"Verano","descripcion":null,
            "porcentaje_descuento":"15.5","fecha_inicio":"2024-01-01T00:00:00.000Z",
            "fecha_fin":"2024-03-31","status":"A","fecha_creac":null,"fecha_mod":null,
            "usuario_mod":"eva"}"#;

        let promotion: DomainPromotion =
            serde_json::from_str::<Promotion>(json).expect("decode").into();

        assert_eq!(promotion.id, 5);
        assert_eq!(promotion.description, "");
        assert_eq!(promotion.discount_percent, Decimal::new(155, 1));
        assert_eq!(promotion.starts_on, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
        assert_eq!(promotion.ends_on, NaiveDate::from_ymd_opt(2024, 3, 31).expect("date"));
        assert!(promotion.audit.created_at.is_none());

        let body = serde_json::to_value(PromotionBody::from(&promotion)).expect("encode");

        assert!(body.get("promocion_id").is_none());
        assert_eq!(body["porcentaje_descuento"], "15.5");
        assert_eq!(body["fecha_fin"], "2024-03-31");
        assert_eq!(body["status"], "A");
        assert_eq!(body["usuario_mod"], "eva");
    }
}
