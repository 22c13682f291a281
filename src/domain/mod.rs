use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

pub mod cart;
pub mod cart_detail;
pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod invoice;
pub mod invoice_detail;
pub mod login_record;
pub mod order;
pub mod order_detail;
pub mod payment_method;
pub mod product;
pub mod product_purchase;
pub mod product_review;
pub mod promotion;
pub mod promotion_product;
pub mod purchase_record;
pub mod role;
pub mod status;
pub mod supplier;
pub mod surface_category;
pub mod user;

pub use status::{OrderStage, RecordStatus};

/// Audit columns shared by the catalog backend's records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrail {
    /// When the backend created the row, if it reports it.
    pub created_at: Option<NaiveDateTime>,
    /// Last modification time, absent for untouched rows.
    pub modified_at: Option<NaiveDateTime>,
    /// Operator who last modified the row.
    pub modified_by: Option<String>,
}

/// Query definition shared by every entity list.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Optional case-insensitive substring search.
    pub search: Option<String>,
    /// Optional status filter.
    pub status: Option<RecordStatus>,
    /// Optional pagination options applied after filtering.
    pub pagination: Option<Pagination>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    /// Keep only records carrying the given status.
    pub fn status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Records that can be filtered by a [`ListQuery`].
pub trait Searchable {
    /// Identifier used for ordering.
    fn id(&self) -> i32;

    /// Current activity flag of the record.
    fn status(&self) -> RecordStatus;

    /// Text fields matched by the search box, besides the identifier.
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive match of `term` against the id and the text fields.
    fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.id().to_string() == needle {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
