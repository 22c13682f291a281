//! JSON shapes exchanged with the two REST backends.
//!
//! The commerce backend uses Spanish `snake_case` names, `activo`/`inactivo`
//! statuses and plain numbers for money. The catalog backend uses `A`/`I`
//! statuses, decimal strings for money and nullable audit columns. Every
//! wire struct converts into its domain record with `From`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::domain::AuditTrail;

pub mod cart;
pub mod cart_detail;
pub mod customer;
pub mod inventory;
pub mod invoice;
pub mod invoice_detail;
pub mod login_record;
pub mod order;
pub mod order_detail;
pub mod payment_method;
pub mod product;
pub mod product_purchase;
pub mod product_review;
pub mod promotion;
pub mod promotion_product;
pub mod purchase_record;
pub mod role;
pub mod status;
pub mod supplier;
pub mod surface_category;
pub mod timestamp;
pub mod user;

/// Identifier sent in create bodies; the backend assigns the real one.
pub const PLACEHOLDER_ID: i32 = 0;

/// Deserialize a string that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Audit columns of catalog rows, flattened into each wire struct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogAudit {
    #[serde(default, with = "timestamp::option")]
    pub fecha_creac: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp::option")]
    pub fecha_mod: Option<NaiveDateTime>,
    #[serde(default)]
    pub usuario_mod: Option<String>,
}

impl From<CatalogAudit> for AuditTrail {
    fn from(value: CatalogAudit) -> Self {
        Self {
            created_at: value.fecha_creac,
            modified_at: value.fecha_mod,
            modified_by: value.usuario_mod.filter(|user| !user.trim().is_empty()),
        }
    }
}

/// Message carried by a backend error body, if any.
///
/// Both backends answer failures with `{"message": ...}`; `error` and
/// `detail` are accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .or(self.detail)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"bad","message":"Cliente no encontrado"}"#)
                .expect("parse");
        assert_eq!(body.into_message().as_deref(), Some("Cliente no encontrado"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).expect("parse");
        assert_eq!(body.into_message(), None);
    }
}
