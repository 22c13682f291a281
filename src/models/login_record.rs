use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::login_record::{
    LoginRecord as DomainLoginRecord, NewLoginRecord as DomainNewLoginRecord,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

/// Login security row: last login and failed attempts per customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub id_login: i32,
    pub id_cliente: i32,
    #[serde(with = "timestamp::datetime")]
    pub ultimo_login: NaiveDateTime,
    pub intentos_fallidos: i32,
    #[serde(deserialize_with = "status::flag::deserialize")]
    pub verificado: bool,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<LoginRecord> for DomainLoginRecord {
    fn from(value: LoginRecord) -> Self {
        Self {
            id: value.id_login,
            customer_id: value.id_cliente,
            last_login: value.ultimo_login,
            failed_attempts: value.intentos_fallidos,
            verified: value.verificado,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainLoginRecord> for LoginRecord {
    fn from(value: &DomainLoginRecord) -> Self {
        Self {
            id_login: value.id,
            id_cliente: value.customer_id,
            ultimo_login: value.last_login,
            intentos_fallidos: value.failed_attempts,
            verificado: value.verified,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewLoginRecord> for LoginRecord {
    fn from(value: &DomainNewLoginRecord) -> Self {
        Self {
            id_login: PLACEHOLDER_ID,
            id_cliente: value.customer_id,
            ultimo_login: value.last_login,
            intentos_fallidos: value.failed_attempts,
            verificado: value.verified,
            status: RecordStatus::Active,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_login_security_row() {
        let json = r#"{"id_login":2,"id_cliente":4,"ultimo_login":"2024-05-01T10:30:00.000Z",
            "intentos_fallidos":3,"verificado":1,"status":"activo","empleado_mod":"eva"}"#;

        let record: DomainLoginRecord =
            serde_json::from_str::<LoginRecord>(json).expect("decode").into();

        assert_eq!(record.customer_id, 4);
        assert_eq!(record.failed_attempts, 3);
        assert!(record.verified);
        assert_eq!(
            record.last_login.format("%Y-%m-%d %H:%M").to_string(),
            "2024-05-01 10:30"
        );

        let body = serde_json::to_value(LoginRecord::from(&record)).expect("encode");

        assert_eq!(body["id_login"], 2);
        assert_eq!(body["ultimo_login"], "2024-05-01T10:30:00");
        assert_eq!(body["intentos_fallidos"], 3);
        assert_eq!(body["status"], "activo");
    }
}
