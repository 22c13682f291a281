use serde::{Deserialize, Serialize};

use crate::domain::{AuditTrail, RecordStatus, Searchable};

/// Product surface category (finish/material grouping used by the catalog).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurfaceCategory {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
    pub audit: AuditTrail,
}

impl Searchable for SurfaceCategory {
    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSurfaceCategory {
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSurfaceCategory {
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
    pub modified_by: Option<String>,
}

impl UpdateSurfaceCategory {
    pub fn apply_to(self, current: SurfaceCategory) -> SurfaceCategory {
        SurfaceCategory {
            id: current.id,
            name: self.name,
            description: self.description,
            status: self.status,
            audit: AuditTrail {
                modified_by: self.modified_by,
                ..current.audit
            },
        }
    }
}
