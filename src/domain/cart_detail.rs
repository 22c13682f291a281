use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// A product line inside a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartDetail {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Stored line total; the backend does not recompute it.
    pub total: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for CartDetail {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.cart_id.to_string(),
            self.product_id.to_string(),
            self.modified_by.clone(),
        ]
    }
}

/// Quantity times unit price, `None` when the product does not fit a [`Decimal`].
pub fn checked_line_total(quantity: i32, unit_price: Decimal) -> Option<Decimal> {
    Decimal::from(quantity).checked_mul(unit_price)
}

/// Quantity times unit price, saturating at [`Decimal::MAX`].
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity).saturating_mul(unit_price)
}

/// Payload required to add a line to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartDetail {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub modified_by: String,
}

impl NewCartDetail {
    /// Build the payload and compute its line total.
    pub fn new(
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        unit_price: Decimal,
        modified_by: impl Into<String>,
    ) -> Self {
        Self {
            cart_id,
            product_id,
            quantity,
            unit_price,
            total: line_total(quantity, unit_price),
            modified_by: modified_by.into(),
        }
    }
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCartDetail {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateCartDetail {
    /// Produce the full record, recomputing the line total.
    pub fn apply_to(self, current: CartDetail) -> CartDetail {
        CartDetail {
            id: current.id,
            cart_id: self.cart_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total: line_total(self.quantity, self.unit_price),
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
