use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Supplier the store purchases products from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    /// Unique identifier of the supplier.
    pub id: i32,
    /// Company name.
    pub name: String,
    /// Person to contact at the supplier.
    pub contact_name: String,
    /// Contact email, stored in lowercase.
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for Supplier {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact_name.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSupplier {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateSupplier {
    pub fn apply_to(self, current: Supplier) -> Supplier {
        Supplier {
            id: current.id,
            name: self.name,
            contact_name: self.contact_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
