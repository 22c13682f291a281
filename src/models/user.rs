use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::user::{
    LoginCredentials as DomainLoginCredentials, NewUser as DomainNewUser, User as DomainUser,
};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status, timestamp};

/// User row. `contraseña` is write-only: it is never read back and only sent
/// when a password is being set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id_usuario: i32,
    pub nombre: String,
    pub email: String,
    #[serde(
        rename = "contraseña",
        default,
        skip_deserializing,
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
    pub id_rol: i32,
    #[serde(with = "status::flag")]
    pub activo: bool,
    #[serde(with = "timestamp::datetime")]
    pub fecha_registro: NaiveDateTime,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl User {
    /// Full-record body for an update, optionally replacing the password.
    pub fn for_update(value: &DomainUser, password: Option<&str>) -> Self {
        Self {
            id_usuario: value.id,
            nombre: value.name.clone(),
            email: value.email.clone(),
            password: password.map(str::to_string),
            id_rol: value.role_id,
            activo: value.active,
            fecha_registro: value.registered_at,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id_usuario,
            name: value.nombre,
            email: value.email,
            role_id: value.id_rol,
            active: value.activo,
            registered_at: value.fecha_registro,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainNewUser> for User {
    fn from(value: &DomainNewUser) -> Self {
        Self {
            id_usuario: PLACEHOLDER_ID,
            nombre: value.name.clone(),
            email: value.email.clone(),
            password: Some(value.password.clone()),
            id_rol: value.role_id,
            activo: value.active,
            fecha_registro: value.registered_at,
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

/// Body of the login request.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "contraseña")]
    pub password: &'a str,
}

impl<'a> From<&'a DomainLoginCredentials> for LoginRequest<'a> {
    fn from(value: &'a DomainLoginCredentials) -> Self {
        Self {
            email: value.email.as_str(),
            password: value.password.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DomainUser {
        let json = r#"{"id_usuario":3,"nombre":"Eva","email":"eva@tienda.com","contraseña":"hash",
            "id_rol":1,"activo":1,"fecha_registro":"2023-11-02",
            "status":"activo","empleado_mod":"root"}"#;
        serde_json::from_str::<User>(json).expect("decode").into()
    }

    #[test]
    fn password_is_never_read_back() {
        let user = User::for_update(&sample(), None);
        let body = serde_json::to_value(&user).expect("encode");

        assert!(body.get("contraseña").is_none());
        assert_eq!(body["activo"], 1);
    }

    #[test]
    fn password_is_sent_when_replaced() {
        let body = serde_json::to_value(User::for_update(&sample(), Some("nueva-clave")))
            .expect("encode");

        assert_eq!(body["contraseña"], "nueva-clave");
    }

    #[test]
    fn login_request_uses_backend_field_names() {
        let credentials = DomainLoginCredentials {
            email: "eva@tienda.com".into(),
            password: "secreto".into(),
        };

        let body = serde_json::to_value(LoginRequest::from(&credentials)).expect("encode");

        assert_eq!(
            body,
            serde_json::json!({"email": "eva@tienda.com", "contraseña": "secreto"})
        );
    }
}
