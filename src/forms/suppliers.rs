use serde::Deserialize;
use validator::Validate;

use crate::domain::supplier::{NewSupplier, UpdateSupplier};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, optional_text,
    parse_status, required_text, sanitize_inline_text,
};

/// Form payload emitted when submitting the "Add supplier" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSupplierForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub contact_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddSupplierForm {
    pub fn into_new_supplier(self) -> FormResult<NewSupplier> {
        self.validate()?;

        Ok(NewSupplier {
            name: required_text(&self.name, "name")?,
            contact_name: sanitize_inline_text(&self.contact_name),
            email: self.email.trim().to_lowercase(),
            phone: sanitize_inline_text(&self.phone),
            address: sanitize_inline_text(&self.address),
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

/// Form payload emitted when editing a supplier.
#[derive(Debug, Deserialize, Validate)]
pub struct EditSupplierForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub contact_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: String,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditSupplierForm {
    pub fn into_update_supplier(self) -> FormResult<EditPayload<UpdateSupplier>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateSupplier {
                name: required_text(&self.name, "name")?,
                contact_name: sanitize_inline_text(&self.contact_name),
                email: self.email.trim().to_lowercase(),
                phone: sanitize_inline_text(&self.phone),
                address: sanitize_inline_text(&self.address),
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}
