use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// A customer's review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductReview {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    /// Score between 0 and 5, one decimal place.
    pub rating: Decimal,
    pub comment: String,
    pub reviewed_at: NaiveDateTime,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for ProductReview {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.product_id.to_string(),
            self.comment.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductReview {
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: Decimal,
    pub comment: String,
    pub reviewed_at: NaiveDateTime,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductReview {
    pub customer_id: i32,
    pub product_id: i32,
    pub rating: Decimal,
    pub comment: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateProductReview {
    /// Produce the full record, keeping the original review time.
    pub fn apply_to(self, current: ProductReview) -> ProductReview {
        ProductReview {
            id: current.id,
            customer_id: self.customer_id,
            product_id: self.product_id,
            rating: self.rating,
            comment: self.comment,
            reviewed_at: current.reviewed_at,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
