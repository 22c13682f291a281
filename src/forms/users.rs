use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, empty_string_as_none, parse_status, required_text,
};

/// Shortest password accepted from the back office.
const PASSWORD_MIN_LEN: u64 = 6;

/// Form payload emitted when submitting the "Add user" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = NAME_MAX_LEN))]
    pub password: String,
    #[validate(range(min = 1))]
    pub role_id: i32,
    /// `true`/`false` select.
    #[serde(default)]
    pub active: bool,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddUserForm {
    pub fn into_new_user(self, now: NaiveDateTime) -> FormResult<NewUser> {
        self.validate()?;

        Ok(NewUser::new(
            required_text(&self.name, "name")?,
            self.email.trim(),
            self.password,
            self.role_id,
            self.active,
            now,
            parse_status(&self.status)?,
            required_text(&self.modified_by, "modified by")?,
        ))
    }
}

/// Form payload emitted when editing a user. A blank password keeps the
/// current one.
#[derive(Debug, Deserialize, Validate)]
pub struct EditUserForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = NAME_MAX_LEN))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub password: Option<String>,
    #[validate(range(min = 1))]
    pub role_id: i32,
    #[serde(default)]
    pub active: bool,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditUserForm {
    pub fn into_update_user(self) -> FormResult<EditPayload<UpdateUser>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateUser {
                name: required_text(&self.name, "name")?,
                email: self.email.trim().to_lowercase(),
                password: self.password,
                role_id: self.role_id,
                active: self.active,
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}
