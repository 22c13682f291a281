use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Domain representation of a customer profile attached to a user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    /// User account the profile belongs to.
    pub user_id: i32,
    /// Given name.
    pub first_name: String,
    /// Family names.
    pub last_name: String,
    /// Contact phone number as typed by the operator.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Whether the customer is active.
    pub status: RecordStatus,
}

impl Customer {
    /// Given name and family names joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Searchable for Customer {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.phone.clone(),
            self.address.clone(),
        ]
    }
}

/// Payload required to register a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

/// Replacement values submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
}

impl UpdateCustomer {
    /// Produce the full record sent to the backend.
    pub fn apply_to(self, current: Customer) -> Customer {
        Customer {
            id: current.id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address: self.address,
            status: self.status,
        }
    }
}
