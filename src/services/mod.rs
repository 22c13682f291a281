use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ListQuery, RecordStatus};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::RepositoryError;

pub mod auth;
pub mod cart_details;
pub mod carts;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod invoice_details;
pub mod invoices;
pub mod login_security;
pub mod order_details;
pub mod order_history;
pub mod orders;
pub mod payment_methods;
pub mod product_purchases;
pub mod product_reviews;
pub mod products;
pub mod promotion_products;
pub mod promotions;
pub mod roles;
pub mod suppliers;
pub mod surfaces;
pub mod users;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Form(String),
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    /// The backend refused the request and explained why.
    #[error("{0}")]
    Backend(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            RepositoryError::Rejected {
                status: 401 | 403, ..
            } => ServiceError::Unauthorized,
            RepositoryError::Rejected { message, .. } => ServiceError::Backend(message),
            other => ServiceError::Repository(other),
        }
    }
}

/// Query parameters accepted by every list page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Status filter; blank or unknown values show every record.
    pub status: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn status_filter(&self) -> Option<RecordStatus> {
        self.status.as_deref().and_then(|value| value.parse().ok())
    }

    /// Build the repository query for the requested page.
    pub fn to_list_query(&self) -> ListQuery {
        let mut query = ListQuery::new().paginate(self.page(), DEFAULT_ITEMS_PER_PAGE);
        if let Some(term) = self.search.as_deref() {
            query = query.search(term);
        }
        if let Some(status) = self.status_filter() {
            query = query.status(status);
        }
        query
    }
}

/// Data required to render an entity list page.
#[derive(Debug, Serialize)]
pub struct PageData<T> {
    /// Paginated rows displayed in the table.
    pub items: Paginated<T>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
    /// Status filter echoed back to the view.
    pub status: Option<RecordStatus>,
}

impl<T> PageData<T> {
    pub(crate) fn new(total: usize, items: Vec<T>, query: &PageQuery) -> Self {
        let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
        Self {
            items: Paginated::new(items, query.page(), total_pages),
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string),
            status: query.status_filter(),
        }
    }
}
