use serde::{Deserialize, Serialize};

use crate::domain::{RecordStatus, Searchable};

/// Access role assigned to back-office users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl Searchable for Role {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.modified_by.clone()]
    }
}

/// Payload required to create a role. The add dialog picks the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRole {
    pub name: String,
    pub status: RecordStatus,
    pub modified_by: String,
}

impl UpdateRole {
    pub fn apply_to(self, current: Role) -> Role {
        Role {
            id: current.id,
            name: self.name,
            status: self.status,
            modified_by: self.modified_by,
        }
    }
}
