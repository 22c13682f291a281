use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, empty_string_as_none, optional_text,
    parse_amount, parse_status, required_text, sanitize_multiline_text,
};

/// Form payload emitted when submitting the "Add product" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Display name of the product.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    /// Unit price as typed; a comma decimal separator is accepted.
    pub price: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub surface_category_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl AddProductForm {
    /// Validate and sanitize the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> FormResult<NewProduct> {
        self.validate()?;

        Ok(NewProduct {
            name: required_text(&self.name, "name")?,
            description: sanitize_multiline_text(&self.description),
            price: parse_amount(&self.price, "price")?,
            category_id: self.category_id,
            surface_category_id: self.surface_category_id,
            status: parse_status(&self.status)?,
            modified_by: optional_text(self.modified_by),
        })
    }
}

/// Form payload emitted when editing a product.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub surface_category_id: i32,
    pub status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = NAME_MAX_LEN))]
    pub modified_by: Option<String>,
}

impl EditProductForm {
    pub fn into_update_product(self) -> FormResult<EditPayload<UpdateProduct>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateProduct {
                name: required_text(&self.name, "name")?,
                description: sanitize_multiline_text(&self.description),
                price: parse_amount(&self.price, "price")?,
                category_id: self.category_id,
                surface_category_id: self.surface_category_id,
                status: parse_status(&self.status)?,
                modified_by: optional_text(self.modified_by),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::forms::FormError;

    fn add_form() -> AddProductForm {
        AddProductForm {
            name: "  Pintura   Látex ".into(),
            description: "Interior\n\n\nLavable".into(),
            price: "1.250,5".replace('.', ""),
            category_id: 3,
            surface_category_id: 1,
            status: "activo".into(),
            modified_by: None,
        }
    }

    #[test]
    fn add_product_form_sanitizes_and_parses_price() {
        let product = add_form().into_new_product().expect("conversion");

        assert_eq!(product.name, "Pintura Látex");
        assert_eq!(product.description, "Interior\n\nLavable");
        assert_eq!(product.price, Decimal::new(12505, 1));
    }

    #[test]
    fn add_product_form_rejects_text_price() {
        let mut form = add_form();
        form.price = "gratis".into();

        assert!(matches!(
            form.into_new_product(),
            Err(FormError::InvalidAmount { field: "price", .. })
        ));
    }

    #[test]
    fn edit_product_form_requires_category() {
        let form = EditProductForm {
            id: 5,
            name: "Brocha".into(),
            description: String::new(),
            price: "3".into(),
            category_id: 0,
            surface_category_id: 1,
            status: "activo".into(),
            modified_by: None,
        };

        assert!(matches!(form.into_update_product(), Err(FormError::Validation(_))));
    }
}
