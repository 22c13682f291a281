use serde::Deserialize;
use validator::Validate;

use crate::domain::role::{NewRole, UpdateRole};
use crate::forms::{EditPayload, FormResult, NAME_MAX_LEN, parse_status, required_text};

/// Form payload emitted when submitting the "Add role" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRoleForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddRoleForm {
    pub fn into_new_role(self) -> FormResult<NewRole> {
        self.validate()?;

        Ok(NewRole {
            name: required_text(&self.name, "name")?,
            status: parse_status(&self.status)?,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditRoleForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditRoleForm {
    pub fn into_update_role(self) -> FormResult<EditPayload<UpdateRole>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateRole {
                name: required_text(&self.name, "name")?,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordStatus;
    use crate::forms::FormError;

    #[test]
    fn add_role_form_accepts_backend_status_words() {
        let form = AddRoleForm {
            name: " Administrador ".into(),
            status: "I".into(),
            modified_by: "eva".into(),
        };

        let role = form.into_new_role().expect("conversion");

        assert_eq!(role.name, "Administrador");
        assert_eq!(role.status, RecordStatus::Inactive);
    }

    #[test]
    fn add_role_form_rejects_unknown_status() {
        let form = AddRoleForm {
            name: "Ventas".into(),
            status: "archivado".into(),
            modified_by: "eva".into(),
        };

        assert!(matches!(form.into_new_role(), Err(FormError::InvalidStatus(_))));
    }
}
