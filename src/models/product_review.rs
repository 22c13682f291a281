use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::product_review::{
    NewProductReview as DomainNewProductReview, ProductReview as DomainProductReview,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReview {
    pub id_resena: i32,
    pub id_cliente: i32,
    pub id_producto: i32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub calificacion: Decimal,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comentario: String,
    #[serde(with = "timestamp::datetime")]
    pub fecha_resena: NaiveDateTime,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<ProductReview> for DomainProductReview {
    fn from(value: ProductReview) -> Self {
        Self {
            id: value.id_resena,
            customer_id: value.id_cliente,
            product_id: value.id_producto,
            rating: value.calificacion,
            comment: value.comentario,
            reviewed_at: value.fecha_resena,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainProductReview> for ProductReview {
    fn from(value: &DomainProductReview) -> Self {
        Self {
            id_resena: value.id,
            id_cliente: value.customer_id,
            id_producto: value.product_id,
            calificacion: value.rating,
            comentario: value.comment.clone(),
            fecha_resena: value.reviewed_at,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewProductReview> for ProductReview {
    fn from(value: &DomainNewProductReview) -> Self {
        Self {
            id_resena: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            id_producto: value.product_id,
            calificacion: value.rating,
            comentario: value.comment.clone(),
            fecha_resena: value.reviewed_at,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_review_with_fractional_rating() {
        let json = r#"{"id_resena":6,"id_cliente":2,"id_producto":8,"calificacion":4.5,
            "comentario":null,"fecha_resena":"2024-04-12 18:00:00","status":"activo",
            "empleado_mod":"luis"}"#;

        let review: DomainProductReview =
            serde_json::from_str::<ProductReview>(json).expect("decode").into();

        assert_eq!(review.rating, Decimal::new(45, 1));
        assert_eq!(review.comment, "");
        assert_eq!(review.product_id, 8);

        let body = serde_json::to_value(ProductReview::from(&review)).expect("encode");

        assert_eq!(body["calificacion"], 4.5);
        assert_eq!(body["fecha_resena"], "2024-04-12T18:00:00");
        assert_eq!(body["id_resena"], 6);
    }
}
