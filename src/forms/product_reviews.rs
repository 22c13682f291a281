use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::product_review::{NewProductReview, UpdateProductReview};
use crate::forms::{
    EditPayload, FormResult, NAME_MAX_LEN, TEXT_MAX_LEN, parse_bounded_amount, parse_status,
    required_text, sanitize_multiline_text,
};

/// Ratings go from zero to five stars.
const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[derive(Debug, Deserialize, Validate)]
pub struct AddProductReviewForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    pub rating: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub comment: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl AddProductReviewForm {
    pub fn into_new_product_review(self, now: NaiveDateTime) -> FormResult<NewProductReview> {
        self.validate()?;

        Ok(NewProductReview {
            customer_id: self.customer_id,
            product_id: self.product_id,
            rating: parse_bounded_amount(&self.rating, "rating", MAX_RATING)?,
            comment: sanitize_multiline_text(&self.comment),
            reviewed_at: now,
            modified_by: required_text(&self.modified_by, "modified by")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditProductReviewForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[validate(range(min = 1))]
    pub product_id: i32,
    pub rating: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub comment: String,
    pub status: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub modified_by: String,
}

impl EditProductReviewForm {
    pub fn into_update_product_review(self) -> FormResult<EditPayload<UpdateProductReview>> {
        self.validate()?;

        Ok(EditPayload {
            id: self.id,
            update: UpdateProductReview {
                customer_id: self.customer_id,
                product_id: self.product_id,
                rating: parse_bounded_amount(&self.rating, "rating", MAX_RATING)?,
                comment: sanitize_multiline_text(&self.comment),
                status: parse_status(&self.status)?,
                modified_by: required_text(&self.modified_by, "modified by")?,
            },
        })
    }
}
