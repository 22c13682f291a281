use serde::Deserialize;
use validator::Validate;

use crate::domain::surface_category::{NewSurfaceCategory, UpdateSurfaceCategory};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, optional_text,
    parse_status, required_text, sanitize_multiline_text,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddSurfaceCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddSurfaceCategoryForm {
    pub fn into_new_surface_category(self) -> FormResult<NewSurfaceCategory> {
        self.validate()?;

        Ok(NewSurfaceCategory {
            name: required_text(&self.name, "name")?,
            description: sanitize_multiline_text(&self.description),
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditSurfaceCategoryForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditSurfaceCategoryForm {
    pub fn into_update_surface_category(
        self,
    ) -> FormResult<EditPayload<UpdateSurfaceCategory>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateSurfaceCategory {
                name: required_text(&self.name, "name")?,
                description: sanitize_multiline_text(&self.description),
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
