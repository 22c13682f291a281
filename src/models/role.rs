use serde::{Deserialize, Serialize};

use crate::domain::RecordStatus;
use crate::domain::role::{NewRole as DomainNewRole, Role as DomainRole};
use crate::models::{PLACEHOLDER_ID, null_as_empty, status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id_rol: i32,
    pub nombre_rol: String,
    #[serde(with = "status::commerce")]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub empleado_mod: String,
}

impl From<Role> for DomainRole {
    fn from(value: Role) -> Self {
        Self {
            id: value.id_rol,
            name: value.nombre_rol,
            status: value.status,
            modified_by: value.empleado_mod,
        }
    }
}

impl From<&DomainRole> for Role {
    fn from(value: &DomainRole) -> Self {
        Self {
            id_rol: value.id,
            nombre_rol: value.name.clone(),
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

impl From<&DomainNewRole> for Role {
    fn from(value: &DomainNewRole) -> Self {
        Self {
            id_rol: PLACEHOLDER_ID,
            nombre_rol: value.name.clone(),
            status: value.status,
            empleado_mod: value.modified_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_role_and_builds_create_body() {
        let json = r#"{"id_rol":1,"nombre_rol":"Administrador",
            "status":"inactivo","empleado_mod":null}"#;

        let role: DomainRole = serde_json::from_str::<Role>(json).expect("decode").into();

        assert_eq!(role.name, "Administrador");
        assert_eq!(role.status, RecordStatus::Inactive);
        assert_eq!(role.modified_by, "");

        let new = DomainNewRole {
            name: "Ventas".into(),
            status: RecordStatus::Active,
            modified_by: "eva".into(),
        };
        let body = serde_json::to_value(Role::from(&new)).expect("encode");

        assert_eq!(
            body,
            serde_json::json!({
                "id_rol": 0,
                "nombre_rol": "Ventas",
                "status": "activo",
                "empleado_mod": "eva"
            })
        );
    }
}
